use super::{Config, Operation, Registers, Stack, Var};
use crate::error;
use crate::lang::ast::{Program, Statement};
use crate::lang::{Error, Num};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Keystroke program evaluator
///
/// Owns the register stack and variable memory. Label calls run on an
/// explicit frame stack, so deep `xeq` chains never recurse on the host.

#[derive(Debug)]
pub struct Runtime {
    config: Config,
    registers: Registers,
    vars: Var,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Config::default())
    }
}

#[derive(Debug)]
struct Frame<'a> {
    body: &'a [Statement],
    pc: usize,
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        Runtime {
            registers: Registers::new(config.stack_size),
            vars: Var::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn var(&self, name: &str) -> Option<&Num> {
        self.vars.get(name)
    }

    /// Shorthand for `registers().at(0)`.
    pub fn x(&self) -> &Num {
        self.registers.at(0)
    }

    /// Execute a program from a fresh register stack and empty variable
    /// memory. Stops at the first error.
    pub fn run(&mut self, program: &Program) -> Result<()> {
        self.registers.clear();
        self.vars.clear();

        let mut labels: HashMap<&str, &[Statement]> = HashMap::new();
        for (name, body) in program.labels() {
            if labels.insert(name, body).is_some() {
                tracing::warn!(label = name, "label redefined");
            }
        }

        // The program body is a frame too but does not count as a call.
        let mut frames: Stack<Frame> = Stack::new(self.config.max_call_depth.saturating_add(1));
        frames.push(Frame {
            body: program.statements(),
            pc: 0,
        })?;
        let mut steps: usize = 0;
        loop {
            let frame = match frames.last_mut() {
                Some(frame) => frame,
                None => break,
            };
            let body: &[Statement] = frame.body;
            let statement = match body.get(frame.pc) {
                Some(statement) => statement,
                None => {
                    frames.pop();
                    continue;
                }
            };
            frame.pc += 1;
            if let Statement::Label(..) = statement {
                continue;
            }
            steps += 1;
            if let Some(max) = self.config.max_steps {
                if steps > max {
                    return Err(error!(StepLimitExceeded, ..&statement.column()));
                }
            }
            tracing::trace!(%statement, depth = frames.len(), "step");
            if let Statement::Execute(col, name) = statement {
                let body = match labels.get(name.as_str()) {
                    Some(body) => *body,
                    None => return Err(error!(UndefinedLabel, ..col; name.as_str())),
                };
                tracing::debug!(label = name.as_str(), depth = frames.len(), "xeq");
                frames
                    .push(Frame { body, pc: 0 })
                    .map_err(|e| e.in_column(col).message(name.as_str()))?;
                continue;
            }
            self.execute(statement)?;
        }
        tracing::debug!(steps, x = %self.x(), "run finished");
        Ok(())
    }

    fn execute(&mut self, statement: &Statement) -> Result<()> {
        match statement {
            Statement::Push(_, val) => self.registers.push(val.clone()),
            Statement::Store(_, name) => {
                let val = self.registers.at(0).clone();
                self.vars.store(name, val);
            }
            Statement::Recall(col, name) => {
                let val = self.vars.fetch(name, col)?;
                self.registers.push(val);
            }
            Statement::Arithmetic(col, op) => {
                let (y, x) = self.pop_2();
                let val = Operation::arithmetic(*op, &y, &x, self.config.division_scale)
                    .map_err(|e| e.in_column(col))?;
                self.registers.push(val);
            }
            Statement::Comparison(_, cmp) => {
                let (y, x) = self.pop_2();
                self.registers.push(Operation::compare(*cmp, &y, &x));
            }
            Statement::Execute(..) | Statement::Label(..) => unreachable!("handled by run"),
        }
        Ok(())
    }

    fn pop_2(&mut self) -> (Num, Num) {
        let x = self.registers.pop();
        let y = self.registers.pop();
        (y, x)
    }
}
