// built-in turtle commands, one file per category
// each file hands back its entries in display order
pub mod appearance;
pub mod drawing;
pub mod movement;
pub mod visual;
