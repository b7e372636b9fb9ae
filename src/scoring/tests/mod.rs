mod common;
mod competition;
mod market;
mod priority;
