use crate::error;
use crate::lang::{Column, Error, Num};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory

#[derive(Debug, Default, Clone)]
pub struct Var {
    vars: HashMap<String, Num>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn get(&self, var_name: &str) -> Option<&Num> {
        self.vars.get(var_name)
    }

    pub fn fetch(&self, var_name: &str, column: &Column) -> Result<Num> {
        match self.vars.get(var_name) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(UndefinedVariable, ..column; var_name)),
        }
    }

    pub fn store(&mut self, var_name: &str, value: Num) {
        if let Some(v) = self.vars.get_mut(var_name) {
            *v = value;
        } else {
            self.vars.insert(var_name.to_string(), value);
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
