/// One row of the lap list as it should be displayed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AnnotatedLap {
    /// 1 for the oldest lap.
    pub number: usize,
    pub duration_ms: u64,
    pub is_fastest: bool,
    pub is_slowest: bool,
}

/// Annotate laps given newest first, where `laps[0]` is the open lap.
///
/// The open lap gets `live_open_lap_extra_ms` added and is never flagged.
/// Closed laps are flagged fastest/slowest only when there are at least two
/// of them; every lap tied with the minimum or maximum is flagged.
pub fn analyze(laps: &[u64], live_open_lap_extra_ms: u64) -> Vec<AnnotatedLap> {
    let bounds = closed_lap_bounds(laps.get(1..).unwrap_or(&[]));
    let count = laps.len();

    laps.iter()
        .enumerate()
        .map(|(index, &duration_ms)| {
            let number = count - index;
            if index == 0 {
                return AnnotatedLap {
                    number,
                    duration_ms: duration_ms + live_open_lap_extra_ms,
                    is_fastest: false,
                    is_slowest: false,
                };
            }
            let (is_fastest, is_slowest) = bounds
                .map(|(min, max)| (duration_ms == min, duration_ms == max))
                .unwrap_or((false, false));
            AnnotatedLap {
                number,
                duration_ms,
                is_fastest,
                is_slowest,
            }
        })
        .collect()
}

fn closed_lap_bounds(closed: &[u64]) -> Option<(u64, u64)> {
    if closed.len() < 2 {
        return None;
    }
    closed.iter().fold(None, |bounds, &lap| match bounds {
        None => Some((lap, lap)),
        Some((min, max)) => Some((min.min(lap), max.max(lap))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(laps: &[AnnotatedLap]) -> Vec<(bool, bool)> {
        laps.iter().map(|lap| (lap.is_fastest, lap.is_slowest)).collect()
    }

    #[test]
    fn test_ties_are_all_flagged() {
        let laps = analyze(&[0, 1000, 500, 500, 2000], 0);
        assert_eq!(
            flags(&laps),
            vec![
                (false, false),
                (false, false), // 1000
                (true, false),  // 500
                (true, false),  // 500
                (false, true),  // 2000
            ]
        );
    }

    #[test]
    fn test_numbering_newest_first() {
        let laps = analyze(&[0, 300, 200, 100], 0);
        let numbers: Vec<usize> = laps.iter().map(|lap| lap.number).collect();
        assert_eq!(numbers, vec![4, 3, 2, 1]);
        let durations: Vec<u64> = laps.iter().map(|lap| lap.duration_ms).collect();
        assert_eq!(durations, vec![0, 300, 200, 100]);
    }

    #[test]
    fn test_fewer_than_two_closed_laps_are_not_flagged() {
        assert!(analyze(&[], 0).is_empty());

        let laps = analyze(&[0], 250);
        assert_eq!(laps[0].duration_ms, 250);
        assert_eq!(flags(&laps), vec![(false, false)]);

        let laps = analyze(&[0, 1000], 5000);
        assert_eq!(flags(&laps), vec![(false, false), (false, false)]);
    }

    #[test]
    fn test_open_lap_never_flagged() {
        // Open lap shorter than every closed lap
        let laps = analyze(&[0, 800, 900], 10);
        assert_eq!(laps[0].duration_ms, 10);
        assert!(!laps[0].is_fastest);
        // A stopped lap equal to the slowest closed lap is still not flagged
        let laps = analyze(&[900, 800, 900], 0);
        assert_eq!(flags(&laps), vec![(false, false), (true, false), (false, true)]);
    }

    #[test]
    fn test_all_equal_closed_laps() {
        let laps = analyze(&[0, 700, 700], 0);
        assert_eq!(flags(&laps), vec![(false, false), (true, true), (true, true)]);
    }
}
