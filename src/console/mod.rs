//! Input parsing and the interactive menu session.
//!
//! The session owns a reader and a writer, so the whole dialogue can be
//! driven by a scripted transcript in tests. Malformed input is rejected
//! here, before the core is invoked; domain failures are printed and the
//! loop continues. Only a choice of `0` (or end of input at the menu)
//! ends the session.

use std::io::{BufRead, Write};

use crate::error::MatrizError;
use crate::primitives::{Dimension, Matrix};
use crate::render::RenderOptions;

/// Parses a dimension line: two positive integers separated by whitespace.
///
/// # Errors
///
/// Returns [`MatrizError::Parse`] for a wrong token count or a non-numeric
/// token, and [`MatrizError::InvalidDimension`] for a zero side.
pub fn parse_dimension(line: &str) -> Result<Dimension, MatrizError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(MatrizError::Parse(format!(
            "expected two integers for a dimension, got {} token(s)",
            tokens.len()
        )));
    }
    let rows = parse_size(tokens[0])?;
    let cols = parse_size(tokens[1])?;
    Dimension::new(rows, cols)
}

fn parse_size(token: &str) -> Result<usize, MatrizError> {
    token
        .parse()
        .map_err(|_| MatrizError::Parse(format!("invalid integer '{token}'")))
}

/// Parses one matrix row: exactly `cols` floating-point tokens.
///
/// # Errors
///
/// Returns [`MatrizError::Parse`] for a wrong token count or a non-numeric
/// token.
pub fn parse_row(line: &str, cols: usize) -> Result<Vec<f64>, MatrizError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != cols {
        return Err(MatrizError::Parse(format!(
            "expected row of {cols} value(s), got {}",
            tokens.len()
        )));
    }
    tokens.iter().map(|token| parse_number(token)).collect()
}

/// Parses a single floating-point scalar.
///
/// # Errors
///
/// Returns [`MatrizError::Parse`] unless the line holds exactly one number.
pub fn parse_scalar(line: &str) -> Result<f64, MatrizError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 1 {
        return Err(MatrizError::Parse(format!(
            "expected one scalar, got {} token(s)",
            tokens.len()
        )));
    }
    parse_number(tokens[0])
}

fn parse_number(token: &str) -> Result<f64, MatrizError> {
    token
        .parse()
        .map_err(|_| MatrizError::Parse(format!("invalid number '{token}'")))
}

/// The interactive menu loop over a reader/writer pair.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    options: RenderOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with the default "#.##" rendering.
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_options(reader, writer, RenderOptions::default())
    }

    /// Creates a session with explicit rendering options.
    pub fn with_options(reader: R, writer: W, options: RenderOptions) -> Self {
        Self {
            reader,
            writer,
            options,
        }
    }

    /// Runs the menu loop until exit or end of input.
    ///
    /// Domain and parse failures are printed to the writer and the loop
    /// continues; only I/O failures abort.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::Io`] if the reader or writer fails.
    pub fn run(&mut self) -> Result<(), MatrizError> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            let outcome = match line.trim() {
                "0" => return Ok(()),
                "1" => self.run_add(),
                "2" => self.run_scale(),
                "3" => self.run_multiply(),
                "4" => self.run_transpose(),
                "5" => self.run_determinant(),
                "6" => self.run_inverse(),
                _ => Ok(()),
            };
            match outcome {
                Ok(()) => {}
                Err(err @ MatrizError::Io(_)) => return Err(err),
                Err(err) => writeln!(self.writer, "{err}")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), MatrizError> {
        writeln!(self.writer, "1. Add matrices")?;
        writeln!(self.writer, "2. Multiply matrix to a constant")?;
        writeln!(self.writer, "3. Multiply matrices")?;
        writeln!(self.writer, "4. Transpose matrices")?;
        writeln!(self.writer, "5. Calculate a determinant")?;
        writeln!(self.writer, "6. Inverse matrix")?;
        writeln!(self.writer, "0. Exit")?;
        write!(self.writer, "Your choice: ")?;
        self.writer.flush()?;
        Ok(())
    }

    fn run_add(&mut self) -> Result<(), MatrizError> {
        let a = self.read_matrix("first ")?;
        let b = self.read_matrix("second ")?;
        let sum = a.add(&b)?;
        writeln!(self.writer, "The sum result is:")?;
        self.print_matrix(&sum)
    }

    fn run_scale(&mut self) -> Result<(), MatrizError> {
        let matrix = self.read_matrix("")?;
        write!(self.writer, "Enter the scalar: ")?;
        self.writer.flush()?;
        let scalar = parse_scalar(&self.require_line()?)?;
        writeln!(self.writer, "The scalar product result is:")?;
        let scaled = matrix.scale(scalar);
        self.print_matrix(&scaled)
    }

    fn run_multiply(&mut self) -> Result<(), MatrizError> {
        let a = self.read_matrix("first ")?;
        let b = self.read_matrix("second ")?;
        let product = a.matmul(&b)?;
        writeln!(self.writer, "The dot product result is:")?;
        self.print_matrix(&product)
    }

    fn run_transpose(&mut self) -> Result<(), MatrizError> {
        writeln!(self.writer, "1. Main diagonal")?;
        writeln!(self.writer, "2. Side diagonal")?;
        writeln!(self.writer, "3. Vertical line")?;
        writeln!(self.writer, "4. Horizontal line")?;
        write!(self.writer, "Your choice: ")?;
        self.writer.flush()?;
        let option = self.require_line()?;
        let matrix = self.read_matrix("")?;
        let transposed = match option.trim() {
            "1" => matrix.transpose_main(),
            "2" => matrix.transpose_secondary(),
            "3" => matrix.transpose_vertical(),
            "4" => matrix.transpose_horizontal(),
            other => {
                return Err(MatrizError::Parse(format!(
                    "invalid transpose option '{other}'"
                )))
            }
        };
        writeln!(self.writer, "The result is:")?;
        self.print_matrix(&transposed)
    }

    fn run_determinant(&mut self) -> Result<(), MatrizError> {
        let matrix = self.read_matrix("")?;
        let determinant = matrix.determinant()?;
        writeln!(self.writer, "The determinant is:")?;
        writeln!(self.writer, "{determinant}")?;
        Ok(())
    }

    fn run_inverse(&mut self) -> Result<(), MatrizError> {
        let matrix = self.read_matrix("")?;
        match matrix.inverse() {
            Ok(inverse) => self.print_matrix(&inverse),
            Err(MatrizError::SingularMatrix { .. }) => {
                writeln!(self.writer, "Matrix has no inverse (determinant = 0)")?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn read_matrix(&mut self, name: &str) -> Result<Matrix<f64>, MatrizError> {
        write!(self.writer, "Enter size of {name}matrix: ")?;
        self.writer.flush()?;
        let dim = parse_dimension(&self.require_line()?)?;
        writeln!(self.writer, "Enter the {name}matrix:")?;
        let mut rows = Vec::with_capacity(dim.rows());
        for _ in 0..dim.rows() {
            rows.push(parse_row(&self.require_line()?, dim.cols())?);
        }
        Matrix::from_rows(&rows)
    }

    fn print_matrix(&mut self, matrix: &Matrix<f64>) -> Result<(), MatrizError> {
        write!(self.writer, "{}", matrix.render(&self.options))?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, MatrizError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn require_line(&mut self) -> Result<String, MatrizError> {
        self.read_line()?
            .ok_or_else(|| MatrizError::Parse("unexpected end of input".to_string()))
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
