pub mod assembler;
pub mod classifier;
pub mod reconciler;

pub use assembler::Assembler;
pub use classifier::CategoryClassifier;
pub use reconciler::AnswerReconciler;
