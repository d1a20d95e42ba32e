//! # Cyclon Overlay Simulation
//!
//! A minimal, deterministic Cyclon-style overlay driving many partial views
//! through gossip rounds. Exchange framing and transport are modelled as
//! direct calls between in-memory nodes.
//!
//! Each round, every live node in id order:
//! 1. ages its view (`increment`)
//! 2. picks its oldest peer as exchange partner and drops every reference to it
//! 3. sends itself plus a sample of its view, led by its least frequent peer
//! 4. on reply, both sides give up one reference to every peer they sent,
//!    merge what they received, then trim back to capacity by evicting the
//!    oldest peers
//!
//! References are swapped, never copied, so the number of references to any
//! peer other than the exchanging pair cannot grow. A dead partner never
//! replies; its references were already removed by the initiator.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use cyclon_partial_view::{
    PartialViewApi, PartialViewService, PeerId, RngRandomSource, ViewConfig,
};

/// Simulation parameters.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of nodes in the overlay
    pub nodes: usize,
    /// Maximum references a node keeps after each exchange
    pub view_capacity: usize,
    /// Number of peer references sent per exchange
    pub shuffle_length: usize,
    /// Seed for every random choice in the run
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            nodes: 32,
            view_capacity: 8,
            shuffle_length: 4,
            seed: 7,
        }
    }
}

/// One simulated overlay node.
#[derive(Debug)]
pub struct Node {
    /// This node's identifier
    pub id: PeerId,
    /// Its partial view
    pub view: PartialViewService,
    /// Whether the node still answers exchanges
    pub alive: bool,
}

/// Counters for a single round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundReport {
    /// Exchanges that reached a live partner
    pub exchanges: usize,
    /// Exchanges aimed at dead partners
    pub failed_exchanges: usize,
    /// Nodes whose view was empty when the round reached them
    pub isolated: usize,
}

/// An in-memory Cyclon overlay.
#[derive(Debug)]
pub struct Overlay {
    config: SimulationConfig,
    nodes: Vec<Node>,
    rng: StdRng,
}

/// Identifier of the node at `index`.
pub fn node_id(index: usize) -> PeerId {
    PeerId::new(format!("node-{index:04}"))
}

impl Overlay {
    /// Build an overlay where node `i` initially knows its ring successors.
    pub fn ring(config: SimulationConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let mut nodes = Vec::with_capacity(config.nodes);

        for index in 0..config.nodes {
            let view_config = ViewConfig::default();
            let source = RngRandomSource::seeded(config.seed.wrapping_add(index as u64 + 1));
            let mut view = PartialViewService::new(view_config, Box::new(source));
            for offset in 1..=config.view_capacity.min(config.nodes.saturating_sub(1)) {
                view.add_neighbor(node_id((index + offset) % config.nodes));
            }
            nodes.push(Node {
                id: node_id(index),
                view,
                alive: true,
            });
        }

        info!(nodes = config.nodes, capacity = config.view_capacity, "built ring overlay");
        Self { config, nodes, rng }
    }

    /// All nodes, in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Simulation parameters.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Stop `index` from answering exchanges.
    pub fn crash(&mut self, index: usize) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.alive = false;
            info!(node = %node.id, "node crashed");
        }
    }

    /// Total references to `peer` held by live nodes.
    pub fn references_to(&self, peer: &PeerId) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.alive)
            .map(|n| n.view.multiplicity(peer))
            .sum()
    }

    /// Run `rounds` gossip rounds.
    pub fn run(&mut self, rounds: usize) -> Vec<RoundReport> {
        (0..rounds).map(|_| self.round()).collect()
    }

    /// Run a single gossip round.
    pub fn round(&mut self) -> RoundReport {
        let mut report = RoundReport::default();

        for initiator in 0..self.nodes.len() {
            if !self.nodes[initiator].alive {
                continue;
            }

            self.nodes[initiator].view.increment();

            let partner = match self.nodes[initiator].view.get_oldest() {
                Ok(partner) => partner,
                Err(_) => {
                    report.isolated += 1;
                    continue;
                }
            };
            // Partner was just read from the view, so removal cannot fail
            let _ = self.nodes[initiator].view.remove_all_neighbor(&partner);

            let mut offer = self.sample(initiator, self.config.shuffle_length.saturating_sub(1));
            offer.insert(0, self.nodes[initiator].id.clone());

            let Some(responder) = self.index_of(&partner).filter(|&i| self.nodes[i].alive) else {
                debug!(initiator = %self.nodes[initiator].id, %partner, "exchange partner unreachable");
                report.failed_exchanges += 1;
                continue;
            };

            let reply = self.sample(responder, self.config.shuffle_length);
            self.give_up(initiator, &offer[1..]);
            self.give_up(responder, &reply);
            self.merge(responder, &offer);
            self.merge(initiator, &reply);
            report.exchanges += 1;
        }

        report
    }

    fn index_of(&self, peer: &PeerId) -> Option<usize> {
        self.nodes.binary_search_by(|n| n.id.cmp(peer)).ok()
    }

    /// Up to `count` distinct peers from a node's view, least frequent first.
    fn sample(&mut self, index: usize, count: usize) -> Vec<PeerId> {
        let view = &self.nodes[index].view;
        let mut picked = Vec::with_capacity(count);

        if let Ok(least) = view.get_least_frequent() {
            picked.push(least);
        }

        let mut rest: Vec<PeerId> = view
            .view()
            .peers()
            .filter(|p| !picked.contains(p))
            .cloned()
            .collect();
        rest.shuffle(&mut self.rng);
        picked.extend(rest);
        picked.truncate(count);
        picked
    }

    /// Drop one reference to each peer handed over in an exchange.
    fn give_up(&mut self, index: usize, sent: &[PeerId]) {
        let node = &mut self.nodes[index];
        for peer in sent {
            let _ = node.view.remove_neighbor(peer);
        }
    }

    fn merge(&mut self, index: usize, received: &[PeerId]) {
        let own = self.nodes[index].id.clone();
        let unique: BTreeSet<&PeerId> = received.iter().filter(|p| **p != own).collect();

        let node = &mut self.nodes[index];
        for peer in unique {
            node.view.add_neighbor(peer.clone());
        }

        while node.view.stats().references > self.config.view_capacity {
            match node.view.get_oldest() {
                Ok(oldest) => {
                    let _ = node.view.remove_all_neighbor(&oldest);
                }
                Err(_) => break,
            }
        }
    }
}
