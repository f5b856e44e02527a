
/*
 * A batch is a whitespace-separated list of tokens:
 * the pattern, the number `n` of candidates, then
 * the `n` candidates. Anything after them is ignored.
 */
pub struct Batch<'a> {
    pub pattern: &'a str,
    pub candidates: Vec<&'a str>,
}

pub fn parse_batch(src: &str) -> Result<Batch<'_>, String> {
    let mut tokens = src.split_whitespace();

    let pattern = tokens.next().ok_or_else(|| "Expected a pattern.".to_string())?;
    let count = tokens.next()
        .ok_or_else(|| "Expected the number of candidates.".to_string())?;
    let count = count.parse::<usize>()
        .map_err(|e| format!("Bad number of candidates \"{}\" : {}", count, e))?;

    let candidates: Vec<&str> = tokens.take(count).collect();
    if candidates.len() != count {
        return Err(format!("Expected {} candidates, found {}.", count, candidates.len()))
    }

    Ok(Batch {pattern, candidates})
}

// One "YES" or "NO" per line, blank lines are skipped.
pub fn parse_verdicts(src: &str) -> Result<Vec<bool>, String> {
    src.lines()
        .enumerate()
        .map(|(i, line)| (i, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| match line {
            "YES" => Ok(true),
            "NO" => Ok(false),
            _ => Err(format!("Line {} : expected \"YES\" or \"NO\", got \"{}\".", i + 1, line)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch() {
        let batch = parse_batch("(a)*d\n3\nabc5\n5\n   a5b\n").unwrap();

        assert_eq!(batch.pattern, "(a)*d");
        assert_eq!(batch.candidates, vec!["abc5", "5", "a5b"]);
    }

    #[test]
    fn batch_ignores_trailing_tokens() {
        let batch = parse_batch("a 1 x y z").unwrap();
        assert_eq!(batch.candidates, vec!["x"]);

        let batch = parse_batch("a 0").unwrap();
        assert!(batch.candidates.is_empty());
    }

    #[test]
    fn malformed_batches() {
        assert!(parse_batch("").is_err());
        assert!(parse_batch("a").is_err());
        assert!(parse_batch("a two x y").is_err());
        assert_eq!(
            parse_batch("a 3 x y").err().unwrap(),
            "Expected 3 candidates, found 2."
        );
    }

    #[test]
    fn verdicts() {
        assert_eq!(parse_verdicts("YES\nNO\n\n  YES \n").unwrap(), vec![true, false, true]);
        assert_eq!(
            parse_verdicts("YES\nyes\n").err().unwrap(),
            "Line 2 : expected \"YES\" or \"NO\", got \"yes\"."
        );
    }
}
