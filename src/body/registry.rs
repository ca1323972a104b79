use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::types::BodyTemplateConfig;
use crate::error::{AppError, AppResult, ConfigError};

use super::builtins;
use super::template::TemplateBody;

/// Produces one request payload per call.
pub trait BodyBuilder: Send + Sync {
    fn build(&self) -> String;
}

impl<F> BodyBuilder for F
where
    F: Fn() -> String + Send + Sync,
{
    fn build(&self) -> String {
        self()
    }
}

#[derive(Clone, Default)]
pub struct BodyRegistry {
    builders: BTreeMap<String, Arc<dyn BodyBuilder>>,
}

impl std::fmt::Debug for BodyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BodyRegistry")
            .field("builders", &self.builders.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl BodyRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding only the built-in builders.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut builders: BTreeMap<String, Arc<dyn BodyBuilder>> = BTreeMap::new();
        builders.insert(
            builtins::EMPTY_OBJECT.to_owned(),
            Arc::new(builtins::empty_object),
        );
        builders.insert(
            builtins::RANDOM_USER.to_owned(),
            Arc::new(builtins::random_user),
        );
        builders.insert(builtins::TIMESTAMP.to_owned(), Arc::new(builtins::timestamp));
        Self { builders }
    }

    /// Built-ins plus every template declared in the config file.
    ///
    /// # Errors
    ///
    /// Returns an error when a template reuses an already registered name.
    pub fn from_config(bodies: &BTreeMap<String, BodyTemplateConfig>) -> AppResult<Self> {
        let mut registry = Self::with_builtins();
        for (name, body) in bodies {
            registry.register(name, TemplateBody::new(body.template.clone()))?;
        }
        Ok(registry)
    }

    /// Adds a builder under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error when `name` is already registered.
    pub fn register<B>(&mut self, name: &str, builder: B) -> AppResult<()>
    where
        B: BodyBuilder + 'static,
    {
        if self.builders.contains_key(name) {
            return Err(AppError::config(ConfigError::DuplicateBody {
                name: name.to_owned(),
            }));
        }
        self.builders.insert(name.to_owned(), Arc::new(builder));
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    /// Runs the named builder, or `None` if it is not registered.
    #[must_use]
    pub fn build(&self, name: &str) -> Option<String> {
        self.builders.get(name).map(|builder| builder.build())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }
}
