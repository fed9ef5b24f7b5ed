pub mod breadth_first;
pub mod depth_first;
pub mod greedy_best_first;
pub mod search_algorithm;
