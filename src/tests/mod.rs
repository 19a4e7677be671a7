mod grid;
mod queue;
