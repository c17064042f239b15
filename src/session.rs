use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ast::node::NodeId;
use crate::ast::printer::NodeDisplay;
use crate::ast::store::NodeStore;
use crate::config::RenderConfig;
use crate::foundation::error::RandomartResult;
use crate::grammar::default::default_grammar;
use crate::grammar::generate::{GenerationStats, Generator};
use crate::grammar::model::Grammar;
use crate::render::pipeline::{FrameRGBA, RenderStats, render_frame_with_stats};

/// A generated artwork: the node store, the grammar it came from, and the tree's root.
///
/// Owns the single [`NodeStore`] of the run; dropping the session frees every node at once.
pub struct Session {
    store: NodeStore,
    grammar: Grammar,
    root: NodeId,
    seed: u64,
    stats: GenerationStats,
}

impl Session {
    /// Build the built-in grammar and expand it with a seeded RNG.
    pub fn generate(config: &RenderConfig) -> RandomartResult<Self> {
        let mut store = NodeStore::new();
        let grammar = default_grammar(&mut store)?;
        Self::generate_with(config, store, grammar)
    }

    /// Expand a caller-supplied grammar whose templates live in `store`.
    pub fn generate_with(
        config: &RenderConfig,
        mut store: NodeStore,
        grammar: Grammar,
    ) -> RandomartResult<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, max_depth = config.max_depth, "generating");

        let mut rng = StdRng::seed_from_u64(seed);
        let mut generator = Generator::new(&grammar, &mut store, &mut rng)
            .with_max_attempts(config.max_attempts);
        let root = generator.generate(config.start_rule, config.max_depth)?;
        let stats = generator.stats();

        tracing::info!(
            nodes = store.tree_size(root),
            depth = store.tree_depth(root),
            "generated tree"
        );

        Ok(Self {
            store,
            grammar,
            root,
            seed,
            stats,
        })
    }

    /// Render the generated tree onto the canvas described by `config`.
    pub fn render(&mut self, config: &RenderConfig) -> RandomartResult<(FrameRGBA, RenderStats)> {
        let canvas = config.canvas()?;
        render_frame_with_stats(&mut self.store, self.root, canvas)
    }

    /// Seed the RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Root of the generated tree.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Store holding the grammar templates and the generated tree.
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// Grammar the tree was expanded from.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Expansion counters.
    pub fn generation_stats(&self) -> GenerationStats {
        self.stats
    }

    /// Printable form of the generated tree.
    pub fn tree(&self) -> NodeDisplay<'_> {
        self.store.display(self.root)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
