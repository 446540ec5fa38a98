//! DIMACS/XNF text I/O: header + body parsing, extended-dialect
//! emission, and transparent `.gz`/`.bz2`/`.xz` (de)compression by
//! shelling out to the matching utility. Parsing is grounded on
//! `shnarazk-splr/src/types/cnf.rs`'s `CNFReader` (header scan via
//! `BufReader` + `split_whitespace`); the compression pipes are grounded
//! on `examples/original_source/cnf2xnf/cnf2xnf.c`'s `main()`, which
//! opens `gzip`/`bzip2`/`xz` via `popen`.

use crate::store::Store;
use crate::types::*;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};

/// Parse a full DIMACS CNF stream into a fresh [`Store`].
pub fn read_dimacs<R: Read>(input: R) -> TransformResult<Store> {
    let mut reader = BufReader::new(input);
    let (num_vars, num_clauses) = read_header(&mut reader)?;
    let mut store = Store::new(num_vars);

    let mut parsed = 0usize;
    let mut literals: Vec<i32> = Vec::new();
    let mut buf = String::new();
    loop {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            break;
        }
        let line = buf.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        for tok in line.split_whitespace() {
            let v: i32 = tok
                .parse()
                .map_err(|_| TransformError::InvalidLiteral {
                    literal: 0,
                    num_vars,
                })?;
            if v == 0 {
                let clause: TransformResult<Vec<Lit>> = literals
                    .drain(..)
                    .map(|raw| validate_literal(raw, num_vars))
                    .collect();
                store.new_clause(clause?);
                parsed += 1;
            } else {
                literals.push(v);
            }
        }
    }
    if !literals.is_empty() {
        return Err(TransformError::MissingTerminator);
    }
    if parsed != num_clauses {
        return Err(TransformError::ClauseCountMismatch {
            declared: num_clauses,
            parsed,
        });
    }
    Ok(store)
}

fn validate_literal(raw: i32, num_vars: u32) -> TransformResult<Lit> {
    if raw == 0 || raw.unsigned_abs() > num_vars {
        return Err(TransformError::InvalidLiteral {
            literal: raw,
            num_vars,
        });
    }
    Ok(Lit::new(raw))
}

fn read_header<R: BufRead>(reader: &mut R) -> TransformResult<(u32, usize)> {
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            return Err(TransformError::UnexpectedEof);
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }
        let mut it = trimmed.split_whitespace();
        if it.next() != Some("p") {
            return Err(TransformError::InvalidHeader);
        }
        if it.next() != Some("cnf") {
            return Err(TransformError::InvalidHeader);
        }
        let num_vars: u32 = it
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or(TransformError::InvalidHeader)?;
        let num_clauses: usize = it
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or(TransformError::InvalidHeader)?;
        return Ok((num_vars, num_clauses));
    }
}

/// Emit the transformed formula in extended DIMACS dialect (§4.6).
pub fn write_output<W: Write>(store: &Store, out: &mut W) -> TransformResult<()> {
    if store.inconsistent {
        writeln!(out, "p cnf 0 1")?;
        writeln!(out, "0")?;
        return Ok(());
    }

    let has_xor = store
        .constraints
        .iter()
        .any(|c| c.is_xor() && !c.is_garbage());
    let num_clauses = store.kept + store.stats.extracted - store.stats.substituted - store.stats.trivial;
    writeln!(
        out,
        "p {} {} {}",
        if has_xor { "xnf" } else { "cnf" },
        store.num_vars,
        num_clauses
    )?;

    for c in &store.constraints {
        if c.is_garbage() || c.is_xor() {
            continue;
        }
        for lit in &c.literals {
            write!(out, "{lit} ")?;
        }
        writeln!(out, "0")?;
    }
    for c in &store.constraints {
        if c.is_garbage() || !c.is_xor() {
            continue;
        }
        // the leading `x` vs `x -` already encodes parity; every literal
        // is emitted positive (variable index only).
        let prefix = if c.parity() { "x" } else { "x -" };
        write!(out, "{prefix} ")?;
        for lit in &c.literals {
            write!(out, "{} ", lit.var())?;
        }
        writeln!(out, "0")?;
    }
    Ok(())
}

/// Open `path` for reading, transparently decompressing `.gz`/`.bz2`/`.xz`
/// by spawning the matching utility and reading its stdout. `"-"` means
/// standard input.
pub fn open_input(path: &str) -> TransformResult<Box<dyn Read>> {
    if path == "-" {
        return Ok(Box::new(std::io::stdin()));
    }
    let p = Path::new(path);
    let decompressor = match p.extension().and_then(|e| e.to_str()) {
        Some("gz") => Some("gzip"),
        Some("bz2") => Some("bzip2"),
        Some("xz") => Some("xz"),
        _ => None,
    };
    match decompressor {
        None => Ok(Box::new(std::fs::File::open(p)?)),
        Some(util) => {
            let child = spawn_decompressor(util, p)?;
            Ok(Box::new(PipeReader { child }))
        }
    }
}

/// Open `path` for writing, transparently compressing to `.gz`/`.bz2`/`.xz`
/// by spawning the matching utility and writing to its stdin. `"-"` means
/// standard output.
pub fn open_output(path: &str) -> TransformResult<Box<dyn Write>> {
    if path == "-" {
        return Ok(Box::new(std::io::stdout()));
    }
    let p = Path::new(path);
    let compressor = match p.extension().and_then(|e| e.to_str()) {
        Some("gz") => Some("gzip"),
        Some("bz2") => Some("bzip2"),
        Some("xz") => Some("xz"),
        _ => None,
    };
    match compressor {
        None => Ok(Box::new(std::fs::File::create(p)?)),
        Some(util) => {
            let child = spawn_compressor(util, p)?;
            Ok(Box::new(PipeWriter { child }))
        }
    }
}

fn spawn_decompressor(util: &str, path: &Path) -> TransformResult<Child> {
    let file = std::fs::File::open(path)?;
    Command::new(util)
        .arg("-dc")
        .stdin(Stdio::from(file))
        .stdout(Stdio::piped())
        .spawn()
        .map_err(TransformError::Io)
}

fn spawn_compressor(util: &str, path: &Path) -> TransformResult<Child> {
    let file = std::fs::File::create(path)?;
    Command::new(util)
        .arg("-c")
        .stdin(Stdio::piped())
        .stdout(Stdio::from(file))
        .spawn()
        .map_err(TransformError::Io)
}

struct PipeReader {
    child: Child,
}

impl Read for PipeReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.child
            .stdout
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::BrokenPipe, "child stdout closed"))?
            .read(buf)
    }
}

impl Drop for PipeReader {
    fn drop(&mut self) {
        let _ = self.child.wait();
    }
}

struct PipeWriter {
    child: Child,
}

impl Write for PipeWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.child
            .stdin
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::BrokenPipe, "child stdin closed"))?
            .write(buf)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.child
            .stdin
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::BrokenPipe, "child stdin closed"))?
            .flush()
    }
}

impl Drop for PipeWriter {
    fn drop(&mut self) {
        drop(self.child.stdin.take());
        let _ = self.child.wait();
    }
}
