//! Circuit building blocks: batched statevector, embeddings, and
//! trainable entangling templates.

pub mod embedding;
pub mod state;
pub mod templates;

pub use embedding::{amplitude_embedding, angle_embedding};
pub use state::StateVector;
pub use templates::{basic_entangler_layers, strongly_entangling_layers, Rotation};
