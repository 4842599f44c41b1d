//! The three coordinated dashboard views.

mod cumulative_lines;
mod discipline_flow;
mod medals_bar;

pub use cumulative_lines::CumulativeLinesView;
pub use discipline_flow::DisciplineFlowView;
pub use medals_bar::MedalsBarView;
