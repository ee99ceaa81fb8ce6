// ABOUTME: Helper modules for habitbite-cli
// ABOUTME: Terminal output formatting

pub mod display;
