//! Runtime configuration for variable setup.

/// Separator of list-valued environment variables on this platform.
pub const LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Prefix of names that resolve to shared variables.
pub const SHARED_NAMESPACE: &str = "shared:";

/// A runtime variable backed by a list-valued environment variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvListBinding {
    /// Name the runtime binds, without `$`.
    pub var_name: String,
    /// Environment variable holding the list.
    pub env_name: String,
}

impl EnvListBinding {
    pub fn new(var_name: impl Into<String>, env_name: impl Into<String>) -> Self {
        EnvListBinding {
            var_name: var_name.into(),
            env_name: env_name.into(),
        }
    }
}

/// Configuration for the variables set up at runtime start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Separator used to split and join env lists.
    /// Defaults to the platform list separator.
    pub list_separator: char,

    /// Env lists bound at startup. Defaults to `paths` over `PATH`.
    pub env_lists: Vec<EnvListBinding>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            list_separator: LIST_SEPARATOR,
            env_lists: vec![EnvListBinding::new("paths", "PATH")],
        }
    }
}

impl RuntimeConfig {
    /// Create a config with the specified list separator.
    #[must_use]
    pub fn with_separator(self, list_separator: char) -> Self {
        Self {
            list_separator,
            ..self
        }
    }

    /// Add an env list binding.
    #[must_use]
    pub fn with_env_list(mut self, var_name: &str, env_name: &str) -> Self {
        self.env_lists.push(EnvListBinding::new(var_name, env_name));
        self
    }
}
