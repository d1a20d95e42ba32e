use tracing::{debug, trace, warn};

use super::core::PartialViewService;
use crate::domain::{Age, PeerId, ViewError, ViewStats};
use crate::ports::PartialViewApi;

impl PartialViewApi for PartialViewService {
    fn get_oldest(&self) -> Result<PeerId, ViewError> {
        self.view.get_oldest().map_err(|e| self.report(e))
    }

    fn increment(&mut self) {
        self.view.increment();
        trace!(
            references = self.view.total_references(),
            "aged partial view by one round"
        );
    }

    fn add_neighbor(&mut self, peer: PeerId) -> usize {
        let multiplicity = self.view.add_neighbor(peer.clone());
        debug!(%peer, multiplicity, "added neighbor reference");

        if let Some(threshold) = self.config.multiplicity_warn_threshold {
            if multiplicity > threshold {
                warn!(%peer, multiplicity, threshold, "peer over-represented in partial view");
            }
        }

        multiplicity
    }

    fn remove_neighbor(&mut self, peer: &PeerId) -> Result<Age, ViewError> {
        let age = self.view.remove_neighbor(peer).map_err(|e| self.report(e))?;
        debug!(
            %peer,
            age = age.as_rounds(),
            remaining = self.view.multiplicity(peer),
            "removed newest neighbor reference"
        );
        Ok(age)
    }

    fn remove_all_neighbor(&mut self, peer: &PeerId) -> Result<usize, ViewError> {
        let removed = self
            .view
            .remove_all_neighbor(peer)
            .map_err(|e| self.report(e))?;
        debug!(%peer, removed, "removed all neighbor references");
        Ok(removed)
    }

    fn get_least_frequent(&self) -> Result<PeerId, ViewError> {
        self.view
            .get_least_frequent(self.rng.as_ref())
            .map_err(|e| self.report(e))
    }

    fn len(&self) -> usize {
        self.view.len()
    }

    fn contains(&self, peer: &PeerId) -> bool {
        self.view.contains(peer)
    }

    fn multiplicity(&self, peer: &PeerId) -> usize {
        self.view.multiplicity(peer)
    }

    fn stats(&self) -> ViewStats {
        self.view.stats()
    }
}
