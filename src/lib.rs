// Newsmatch: match free-text input against live news headlines.
//
// This is the library root. Each module corresponds to one stage of the
// matching pipeline: normalize the user's text, fetch headlines from the
// configured sites, score similarity, serve the form.

pub mod config;
pub mod fetch;
pub mod similarity;
pub mod sources;
pub mod text;
pub mod web;
