//! # Integration Flows
//!
//! Multi-round gossip scenarios exercising the partial view through the
//! service API, the way an overlay protocol drives it.
