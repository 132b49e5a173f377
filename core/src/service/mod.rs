pub mod aggregate_service;
pub mod blocks;
pub mod calendar_service;
pub mod color_service;
pub mod dto;
pub mod layout_service;
pub mod scad_service;
