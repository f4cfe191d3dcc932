pub mod resequence;
