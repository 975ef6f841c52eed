//! Text charts: horizontal bars, signed bars, sparklines, heat grids and
//! minute strips.

use unicode_width::UnicodeWidthStr;

const FULL: char = '█';
const EMPTY: char = '·';
const SPARKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const SHADES: [char; 5] = [EMPTY, '░', '▒', '▓', FULL];

/// Pads `text` with spaces to `width` display columns, truncating if longer.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Centers `text` within `width` display columns.
pub fn center(text: &str, width: usize) -> String {
    let len = text.width();
    if len >= width {
        return pad_to_width(text, width);
    }
    let left = (width - len) / 2;
    pad_to_width(&format!("{}{text}", " ".repeat(left)), width)
}

/// A bar `width` cells long, filled in proportion to `value / max`.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 && value > 0.0 {
        ((value / max).min(1.0) * width as f64).round() as usize
    } else {
        0
    };
    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat_n(FULL, filled));
    out.extend(std::iter::repeat_n(EMPTY, width - filled));
    out
}

/// A bar centred on zero: negative values grow left, positive values right.
/// Each half is `half_width` cells.
pub fn signed_bar(value: f64, max_abs: f64, half_width: usize) -> String {
    let cells = if max_abs > 0.0 {
        ((value.abs() / max_abs).min(1.0) * half_width as f64).round() as usize
    } else {
        0
    };
    let (left, right) = if value < 0.0 { (cells, 0) } else { (0, cells) };

    let mut out = String::new();
    out.push_str(&" ".repeat(half_width - left));
    out.extend(std::iter::repeat_n(FULL, left));
    out.push('│');
    out.extend(std::iter::repeat_n(FULL, right));
    out.push_str(&" ".repeat(half_width - right));
    out
}

/// One block per value; values are fractions in [0, 1].
pub fn sparkline(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| {
            let index = (v.clamp(0.0, 1.0) * (SPARKS.len() - 1) as f64).round() as usize;
            SPARKS[index]
        })
        .collect()
}

/// Density grid of `points`, one string per row, top row first.
///
/// Points are fractions of the map in [0, 1] with `y` growing upwards.
/// Empty cells are `·`; the densest cell is `█`.
pub fn heat_grid(points: &[(f64, f64)], cols: usize, rows: usize) -> Vec<String> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }
    let mut counts = vec![vec![0usize; cols]; rows];
    for &(x, y) in points {
        let col = ((x.clamp(0.0, 1.0) * cols as f64) as usize).min(cols - 1);
        let row = rows - 1 - ((y.clamp(0.0, 1.0) * rows as f64) as usize).min(rows - 1);
        counts[row][col] += 1;
    }
    let max = counts.iter().flatten().copied().max().unwrap_or(0);

    counts
        .iter()
        .map(|row| {
            row.iter()
                .map(|&count| {
                    if count == 0 {
                        return SHADES[0];
                    }
                    let level = (count as f64 / max as f64 * (SHADES.len() - 1) as f64).ceil();
                    SHADES[(level as usize).clamp(1, SHADES.len() - 1)]
                })
                .collect::<String>()
        })
        .collect()
}

/// One cell per game minute. Each mark is `(seconds, symbol)`; later marks
/// overwrite earlier ones in the same minute and times past the end land in
/// the last cell.
pub fn minute_strip(marks: &[(u32, char)], minutes: usize) -> String {
    let mut cells = vec![EMPTY; minutes];
    if minutes == 0 {
        return String::new();
    }
    for &(seconds, symbol) in marks {
        let minute = (seconds / 60) as usize;
        cells[minute.min(minutes - 1)] = symbol;
    }
    cells.into_iter().collect()
}
