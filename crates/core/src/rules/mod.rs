//! Movement rules: move generation, attack queries and the king safety filter.

pub mod attacks;
pub mod king;
pub mod movegen;

pub use attacks::{attackers_of, is_guarded_piece, is_square_attacked_by};
pub use king::king_moves;
pub use movegen::{attack_positions, possible_moves, threats};
