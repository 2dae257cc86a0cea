use std::marker::PhantomData;

use crate::{
    cooldown::Cooldown,
    error::{AnnealingError, Result},
    mutation::Mutation,
    solution::Solution,
};

use super::{options::AnnealingOptions, Annealing};

/// Fluent construction of an [`Annealing`] engine.
///
/// ```rust
/// use annealing::annealing::{AnnealingBuilder, AnnealingOptions};
/// use annealing::cooldown::Boltzmann;
/// use annealing::scheduling::{ReassignMutation, Schedule};
///
/// let engine = AnnealingBuilder::<Schedule, _, _>::new()
///     .with_mutation(ReassignMutation)
///     .with_cooldown(Boltzmann::new(1000.0).unwrap())
///     .with_options(AnnealingOptions::new(2, 10, 10))
///     .build()
///     .unwrap();
/// assert_eq!(engine.options().get_workers(), 2);
/// ```
#[derive(Debug)]
pub struct AnnealingBuilder<S, M, C>
where
    S: Solution,
    M: Mutation<S>,
    C: Cooldown,
{
    mutation: Option<M>,
    cooldown: Option<C>,
    options: Option<AnnealingOptions>,
    _marker: PhantomData<S>,
}

impl<S, M, C> AnnealingBuilder<S, M, C>
where
    S: Solution,
    M: Mutation<S>,
    C: Cooldown,
{
    pub fn new() -> Self {
        Self {
            mutation: None,
            cooldown: None,
            options: None,
            _marker: PhantomData,
        }
    }

    pub fn with_mutation(mut self, mutation: M) -> Self {
        self.mutation = Some(mutation);
        self
    }

    pub fn with_cooldown(mut self, cooldown: C) -> Self {
        self.cooldown = Some(cooldown);
        self
    }

    pub fn with_options(mut self, options: AnnealingOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Builds the engine. Options fall back to [`AnnealingOptions::default`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the mutation or cooldown is missing, or if the
    /// engine rejects the options.
    pub fn build(self) -> Result<Annealing<S, M, C>> {
        let mutation = self.mutation.ok_or_else(|| {
            AnnealingError::Configuration("Mutation strategy not specified".to_string())
        })?;

        let cooldown = self.cooldown.ok_or_else(|| {
            AnnealingError::Configuration("Cooldown strategy not specified".to_string())
        })?;

        Annealing::new(mutation, cooldown, self.options.unwrap_or_default())
    }
}

impl<S, M, C> Default for AnnealingBuilder<S, M, C>
where
    S: Solution,
    M: Mutation<S>,
    C: Cooldown,
{
    fn default() -> Self {
        Self::new()
    }
}
