// ABOUTME: Launch command of a ROS2 workload: binary plus ordered arguments.
// ABOUTME: Nested inside the deployment descriptor under `command`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::deserialize::{deserialize_args, deserialize_binary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    #[serde(deserialize_with = "deserialize_binary")]
    pub binary: String,

    #[serde(default, deserialize_with = "deserialize_args")]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.binary)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
