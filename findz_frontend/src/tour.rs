//! Narrated walkthrough of the elementary control structures, the companion
//! program to the membership driver. Every section works on literal inputs
//! and produces its narration as lines, so the output stays deterministic and
//! testable.

/// Selection: `if`, `if`/`else`, and a chained `else if` ladder.
pub fn selection() -> Vec<String> {
    let mut lines = Vec::new();

    let number = 10;
    if number > 0 {
        lines.push(format!("selection: {number} is positive"));
    }

    let number = -3;
    if number >= 0 {
        lines.push(format!("selection: {number} is non-negative"));
    } else {
        lines.push(format!("selection: {number} is negative"));
    }

    let score = 75;
    let grade = if score >= 90 {
        "A"
    } else if score >= 75 {
        "B"
    } else if score >= 50 {
        "C"
    } else {
        "fail"
    };
    lines.push(format!("selection: score {score} earns grade {grade}"));

    let temperature = 28;
    if temperature > 30 {
        lines.push(format!("selection: {temperature} degrees is a hot day"));
    } else {
        lines.push(format!("selection: {temperature} degrees is not too hot"));
    }

    lines
}

/// Bounded iteration: counting `for` loops, selection nested inside a loop,
/// and a loop nested inside another loop.
pub fn bounded_iteration() -> Vec<String> {
    let mut lines = Vec::new();

    for i in 1..=5 {
        lines.push(format!("for: i = {i}"));
    }

    for i in 1..=10 {
        if i % 2 == 0 {
            lines.push(format!("for+if: {i} is even"));
        } else {
            lines.push(format!("for+if: {i} is odd"));
        }
    }

    for x in 1..=3 {
        for y in 1..=2 {
            lines.push(format!("nested for: x = {x}, y = {y}"));
        }
    }

    lines
}

/// Conditional iteration: `while` with the test up front, and `loop` with the
/// test at the bottom (the body runs at least once).
pub fn conditional_iteration() -> Vec<String> {
    let mut lines = Vec::new();

    let mut j = 1;
    while j <= 3 {
        lines.push(format!("while: j = {j}"));
        j += 1;
    }

    let mut k = 1;
    loop {
        lines.push(format!("loop: k = {k}"));
        k += 1;
        if k > 3 {
            break;
        }
    }

    let mut p = 1;
    while p <= 5 {
        if p == 3 {
            lines.push("while+if: reached the midpoint".to_string());
        }
        lines.push(format!("while+if: p = {p}"));
        p += 1;
    }

    lines
}

/// Early exit and skip: `break` stops a scan at the first hit, `continue`
/// skips one iteration, and a labeled `break` leaves both levels of a nest.
pub fn exits_and_skips() -> Vec<String> {
    let mut lines = Vec::new();

    for i in 1..=10 {
        if i == 5 {
            lines.push("break: found 5, stopping early".to_string());
            break;
        }
        lines.push(format!("break: i = {i}"));
    }

    for i in 1..=7 {
        if i == 5 {
            continue;
        }
        lines.push(format!("continue: i = {i}"));
    }

    'rows: for x in 1..=3 {
        for y in 1..=3 {
            if x * y > 4 {
                lines.push(format!("labeled break: stopped at x = {x}, y = {y}"));
                break 'rows;
            }
            lines.push(format!("labeled break: x = {x}, y = {y}"));
        }
    }

    lines
}

/// The whole tour, section by section.
pub fn run() -> Vec<String> {
    let mut lines = Vec::new();
    lines.extend(selection());
    lines.extend(bounded_iteration());
    lines.extend(conditional_iteration());
    lines.extend(exits_and_skips());
    lines
}
