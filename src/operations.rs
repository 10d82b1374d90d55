pub mod folder;
pub mod scan;
pub mod threshold;
pub mod group;
pub mod concat;
