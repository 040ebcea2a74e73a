//! # Mailblocks HTML Exporter
//!
//! Renders a block tree as a standalone, table-based email HTML document.
//!
//! Every block becomes one single-cell table row inside a centered 600px
//! table, which keeps layout intact in clients that strip `<style>` or
//! ignore most CSS. Output is a pure function of its inputs.

mod compiler;


pub use compiler::{export_block, export_document, export_document_with, ExportOptions};
