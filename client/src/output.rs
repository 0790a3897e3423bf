use std::io::Write;

use anyhow::Context;
use libgame::{
    board::GameBoard,
    codec::{self, Glyphs},
};

use crate::config::Config;

/// Writes one block per generation: a header, the glyph rows and the compact rows.
pub struct GenerationPrinter<W: Write> {
    writer: W,
    glyphs: Glyphs,
    show_glyphs: bool,
    show_compact: bool,
    printed_any: bool,
}

impl<W: Write> GenerationPrinter<W> {
    pub fn new(writer: W, config: &Config) -> Self {
        Self {
            writer,
            glyphs: config.glyphs,
            show_glyphs: config.show_glyphs,
            show_compact: config.show_compact,
            printed_any: false,
        }
    }

    pub fn print(&mut self, generation: usize, board: &GameBoard) -> anyhow::Result<()> {
        if self.printed_any {
            writeln!(self.writer)?;
        }
        self.printed_any = true;

        writeln!(self.writer, "Generation {generation}")?;

        if self.show_glyphs {
            for row in codec::render_glyphs_with(board, self.glyphs) {
                writeln!(self.writer, "{row}")?;
            }
        }

        if self.show_compact {
            let compact_rows = codec::encode(board)
                .with_context(|| format!("Couldn't encode generation {generation}"))?;

            for row in compact_rows {
                writeln!(self.writer, "{row}")?;
            }
        }

        Ok(())
    }

    pub fn finish(mut self) -> anyhow::Result<W> {
        self.writer.flush().context("Couldn't flush output")?;
        Ok(self.writer)
    }
}
