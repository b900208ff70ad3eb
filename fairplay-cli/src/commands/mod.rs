pub mod play;
pub mod table;

pub use play::play_round;
pub use table::render_table;
