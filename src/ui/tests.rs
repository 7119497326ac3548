use std::time::Duration;

use super::format::{bar, format_bytes, format_count, format_elapsed, format_percent_x10,
    format_x100, percent_x10};

#[test]
fn elapsed_renders_as_wall_clock() -> Result<(), String> {
    let cases = [
        (Duration::ZERO, "00:00:00"),
        (Duration::from_secs(59), "00:00:59"),
        (Duration::from_secs(61), "00:01:01"),
        (Duration::from_secs(3_661), "01:01:01"),
    ];
    for (input, expected) in cases {
        let rendered = format_elapsed(input);
        if rendered != expected {
            return Err(format!("{:?} rendered as {}", input, rendered));
        }
    }
    Ok(())
}

#[test]
fn bytes_scale_through_units() -> Result<(), String> {
    let cases = [
        (0, "0.0 B"),
        (512, "512.0 B"),
        (2_048, "2.0 KB"),
        (1_572_864, "1.5 MB"),
        (3_221_225_472, "3.0 GB"),
    ];
    for (input, expected) in cases {
        let rendered = format_bytes(input);
        if rendered != expected {
            return Err(format!("{} rendered as {}", input, rendered));
        }
    }
    Ok(())
}

#[test]
fn counts_group_thousands() -> Result<(), String> {
    let cases = [
        (0, "0"),
        (999, "999"),
        (1_000, "1,000"),
        (1_234_567, "1,234,567"),
    ];
    for (input, expected) in cases {
        let rendered = format_count(input);
        if rendered != expected {
            return Err(format!("{} rendered as {}", input, rendered));
        }
    }
    Ok(())
}

#[test]
fn scaled_rate_renders_two_decimals() -> Result<(), String> {
    if format_x100(0) != "0.00" {
        return Err(format!("0 rendered as {}", format_x100(0)));
    }
    if format_x100(123_456) != "1234.56" {
        return Err(format!("123456 rendered as {}", format_x100(123_456)));
    }
    Ok(())
}

#[test]
fn percent_is_zero_safe() -> Result<(), String> {
    if percent_x10(5, 0) != 0 {
        return Err("Zero total must yield zero percent".to_owned());
    }
    if percent_x10(1, 3) != 333 {
        return Err(format!("1/3 rendered as {}", percent_x10(1, 3)));
    }
    if format_percent_x10(333) != "33.3%" {
        return Err(format!("333 rendered as {}", format_percent_x10(333)));
    }
    Ok(())
}

#[test]
fn bars_fill_proportionally() -> Result<(), String> {
    let empty = bar(0, 20);
    if empty.chars().any(|ch| ch == '\u{2588}') {
        return Err(format!("Zero percent produced fill: {}", empty));
    }
    let full = bar(1_000, 20);
    if full.chars().any(|ch| ch == '\u{2591}') {
        return Err(format!("Full percent left gaps: {}", full));
    }
    let half = bar(500, 20);
    let filled = half.chars().filter(|ch| *ch == '\u{2588}').count();
    if filled != 10 {
        return Err(format!("Half percent filled {} of 20", filled));
    }
    Ok(())
}
