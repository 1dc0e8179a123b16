use std::collections::HashMap;

/// The two primitive variable kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Ankhe,
    Varttai,
}

impl VarType {
    pub fn keyword(self) -> &'static str {
        match self {
            VarType::Ankhe => "ANKHE",
            VarType::Varttai => "VARTTAI",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Symbol {
    pub var_type: VarType,
    pub declared_at: usize,
    pub initialized: bool,
}

/// Flat name -> symbol map, populated strictly in line order. There is no
/// nesting: a name declared inside a loop stays visible after the loop
/// closes, and nothing is ever removed during a run.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: &str, var_type: VarType, line: usize, initialized: bool) {
        self.entries.insert(
            name.to_string(),
            Symbol {
                var_type,
                declared_at: line,
                initialized,
            },
        );
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.entries.get(name)
    }

    pub fn type_of(&self, name: &str) -> Option<VarType> {
        self.entries.get(name).map(|s| s.var_type)
    }
}
