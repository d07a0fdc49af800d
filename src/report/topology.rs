//! ASCII schematic of a Pi ladder.
//!
//! ```text
//!   IN ───┬───┤ L1 ├───┬─── OUT
//!         │            │
//!        ===          ===
//!         C1           C2
//!         │            │
//!        GND          GND
//! ```

/// Draw a Pi ladder with `capacitors` shunt taps and `inductors` series
/// elements. Expects `capacitors == inductors` or `capacitors == inductors + 1`.
pub fn render_topology(capacitors: usize, inductors: usize) -> String {
    let mut main = String::from("  IN ───┬");
    for i in 1..=inductors {
        main.push_str(&format!("───┤ L{} ├───┬", i));
    }

    if capacitors <= inductors {
        // Even order: the ladder ends on an inductor, no tap before OUT
        main.pop();
    }
    main.push_str("─── OUT");

    let line: Vec<char> = main.chars().collect();
    let taps: Vec<usize> = line
        .iter()
        .enumerate()
        .filter(|(_, ch)| **ch == '┬')
        .map(|(pos, _)| pos)
        .collect();

    let labels: Vec<String> = (1..=taps.len()).map(|i| format!("C{}", i)).collect();
    let wire = centered_row(line.len(), &taps, |_| "│");
    let rows = [
        wire.clone(),
        centered_row(line.len(), &taps, |_| "==="),
        centered_row(line.len(), &taps, |i| labels[i].as_str()),
        wire,
        centered_row(line.len(), &taps, |_| "GND"),
    ];

    let mut out = main;
    for row in rows {
        out.push('\n');
        out.push_str(row.trim_end());
    }
    out
}

/// Place one element centered under each tap position.
fn centered_row<'a>(width: usize, taps: &[usize], element: impl Fn(usize) -> &'a str) -> String {
    let mut chars = vec![' '; width];
    for (i, &pos) in taps.iter().enumerate() {
        let elem: Vec<char> = element(i).chars().collect();
        let start = pos as isize - (elem.len() / 2) as isize;
        for (j, ch) in elem.into_iter().enumerate() {
            let at = start + j as isize;
            if (0..width as isize).contains(&at) {
                chars[at as usize] = ch;
            }
        }
    }
    chars.into_iter().collect()
}
