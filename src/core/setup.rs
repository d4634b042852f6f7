use crate::core::{Board, Cell};
use anyhow::{bail, Context};

/// 文字列配列から盤面を組み立てる
///
/// Tokens are whitespace separated: `.` empty, `#` hole, `B`/`X` black,
/// `W`/`O` white. Blank lines are ignored.
pub fn board_from_strings(setup: &[&str]) -> anyhow::Result<Board> {
    let mut rows = Vec::new();
    for (y, line) in setup.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(parse_cell)
            .collect::<anyhow::Result<Vec<Cell>>>()
            .with_context(|| format!("line {}", y + 1))?;
        rows.push(row);
    }
    Ok(Board::from_rows(rows)?)
}

fn parse_cell(token: &str) -> anyhow::Result<Cell> {
    let cell = match token {
        "." => Cell::Empty,
        "#" => Cell::Hole,
        "B" | "b" | "X" | "x" => Cell::Black,
        "W" | "w" | "O" | "o" => Cell::White,
        other => bail!("unknown cell token {:?}", other),
    };
    Ok(cell)
}
