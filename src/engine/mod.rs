pub mod rng;
pub mod select;
pub mod weights;

pub use rng::Rng;
pub use select::{
    assign_skill, select_squad, SelectedOperator, SelectionConfig, SelectionError, SQUAD_SIZE,
};
pub use weights::{rarity_bonus, selection_weight};
