//! Animated statistic counters ("500+", "98%").

/// A counter parsed from its rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    original: String,
    target: f64,
    plus: bool,
    percent: bool,
}

impl CounterAnimation {
    /// Parse the counter text. The target is every digit of the text read as
    /// one number; text without digits cannot be animated. Very long digit
    /// runs lose precision rather than failing.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        let target = digits.parse::<f64>().ok().filter(|t| t.is_finite())?;

        Some(Self {
            original: text.to_string(),
            target,
            plus: text.contains('+'),
            percent: text.contains('%'),
        })
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Frames counting up from zero in `steps` equal increments. The last
    /// frame is always the original text.
    pub fn frames(&self, steps: u32) -> CounterFrames<'_> {
        let steps = steps.max(1);
        CounterFrames {
            counter: self,
            current: 0.0,
            increment: self.target / f64::from(steps),
            done: false,
        }
    }

    fn render(&self, value: f64) -> String {
        let mut text = format!("{value}");
        if self.plus {
            text.push('+');
        }
        if self.percent {
            text.push('%');
        }
        text
    }
}

/// Iterator over the displayed text of a running counter.
#[derive(Debug)]
pub struct CounterFrames<'a> {
    counter: &'a CounterAnimation,
    current: f64,
    increment: f64,
    done: bool,
}

impl Iterator for CounterFrames<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        let target = self.counter.target;
        if self.current < target {
            self.current += self.increment;
            // Accumulated float error may overshoot by one step; never show more than the target.
            let shown = self.current.ceil().min(target);
            Some(self.counter.render(shown))
        } else {
            self.done = true;
            Some(self.counter.original.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_suffixes() {
        let counter = CounterAnimation::parse("500+").unwrap();
        assert_eq!(counter.target(), 500.0);
        assert_eq!(counter.render(12.0), "12+");

        let counter = CounterAnimation::parse("98%").unwrap();
        assert_eq!(counter.render(40.0), "40%");
    }

    #[test]
    fn parse_strips_separators() {
        let counter = CounterAnimation::parse("1,200+").unwrap();
        assert_eq!(counter.target(), 1200.0);
    }

    #[test]
    fn text_without_digits_is_not_a_counter() {
        assert_eq!(CounterAnimation::parse("N/A"), None);
        assert_eq!(CounterAnimation::parse(""), None);
    }

    #[test]
    fn counts_up_in_fixed_steps_and_restores_text() {
        let counter = CounterAnimation::parse("500+").unwrap();
        let frames: Vec<String> = counter.frames(50).collect();

        assert_eq!(frames.len(), 51);
        assert_eq!(frames[0], "10+");
        assert_eq!(frames[1], "20+");
        assert_eq!(frames[49], "500+");
        assert_eq!(frames[50], "500+");
    }

    #[test]
    fn frames_never_decrease_or_overshoot() {
        let counter = CounterAnimation::parse("98%").unwrap();
        let values: Vec<u64> = counter
            .frames(50)
            .map(|f| f.trim_end_matches('%').parse().unwrap())
            .collect();

        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| *v <= 98));
        assert_eq!(values.last(), Some(&98));
    }

    #[test]
    fn zero_target_shows_original_immediately() {
        let counter = CounterAnimation::parse("0 complaints").unwrap();
        let frames: Vec<String> = counter.frames(50).collect();
        assert_eq!(frames, vec!["0 complaints".to_string()]);
    }

    #[test]
    fn digits_beyond_integer_range_still_animate() {
        let text = "1234567890123456789012 bales";
        let counter = CounterAnimation::parse(text).unwrap();
        let frames: Vec<String> = counter.frames(50).collect();

        assert!(frames.len() >= 51);
        let (original, counting) = frames.split_last().unwrap();
        assert_eq!(original, text);
        assert!(counting.iter().all(|f| f.chars().all(|c| c.is_ascii_digit())));
    }
}
