pub mod inactive_communities;
