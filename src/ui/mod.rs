/// User interface module
///
/// View functions only; all state lives in `state::form`.

pub mod form;
