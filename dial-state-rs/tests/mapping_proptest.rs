//! Property-based tests for the mapping and colour math.
//! Checks the invariants over whole input domains rather than fixed examples.

use dial::color::hsv_to_rgb;
use dial::direction::detect;
use dial::{digit, palette, tone, ColorEaser, Direction, Position, Rgb888};
use embedded_graphics::pixelcolor::RgbColor;

fn position() -> impl proptest::strategy::Strategy<Value = Position> {
    proptest::strategy::Strategy::prop_map(0u8..16, Position::from_bits)
}

proptest::proptest! {
    /// Swapping the two readings always reverses the reported direction,
    /// wrap pairs included.
    #[test]
    fn detect_is_antisymmetric(a in position(), b in position()) {
        let forward = detect(a, b);
        let backward = detect(b, a);
        assert_eq!(forward, backward.map(Direction::reversed));
    }

    /// Any `u8` register value maps to a valid position.
    #[test]
    fn from_bits_is_total(raw in 0u8..=255u8) {
        let p = Position::from_bits(raw);
        assert!(p.get() <= 15);
        assert_eq!(p.get(), raw % 16);
    }

    /// Folded digits stay in 0..=8 and fold to themselves.
    #[test]
    fn fold_range_and_idempotence(p in position()) {
        let d = digit::fold(p);
        assert!(d.get() <= 8);
        assert_eq!(digit::fold(Position::from_bits(d.get())), d);
    }

    /// Counter-clockwise tones are always 0.8× the clockwise tone.
    #[test]
    fn ccw_tone_ratio(p in position()) {
        let cw = tone::map(p, Direction::Clockwise);
        let ccw = tone::map(p, Direction::CounterClockwise);
        assert_eq!(ccw.frequency_hz, cw.frequency_hz * 4 / 5);
    }

    /// Palette lookup is a pure function of position.
    #[test]
    fn palette_is_pure(p in position()) {
        assert_eq!(palette::color(p), palette::color(p));
    }

    /// hsv_to_rgb never panics, whatever the floats are.
    #[test]
    fn hsv_never_panics(
        h in proptest::num::f32::ANY,
        s in proptest::num::f32::ANY,
        v in proptest::num::f32::ANY,
    ) {
        let _ = hsv_to_rgb(h, s, v);
    }

    /// Zero saturation is always a gray.
    #[test]
    fn zero_saturation_is_gray(h in -720.0f32..720.0, v in 0.0f32..=1.0) {
        let c = hsv_to_rgb(h, 0.0, v);
        assert_eq!(c.r(), c.g());
        assert_eq!(c.g(), c.b());
    }

    /// Full value and saturation always saturate at least one channel and
    /// leave at least one channel dark.
    #[test]
    fn full_saturation_spans_range(h in 0.0f32..360.0) {
        let c = hsv_to_rgb(h, 1.0, 1.0);
        let channels = [c.r(), c.g(), c.b()];
        assert!(channels.contains(&255));
        assert!(channels.contains(&0));
    }

    /// The easer reaches any target in ceil(255 / step) ticks or fewer and
    /// every intermediate channel stays between start and target.
    #[test]
    fn easer_converges_without_overshoot(
        start in proptest::array::uniform3(0u8..=255u8),
        target in proptest::array::uniform3(0u8..=255u8),
        step in 1u8..=255u8,
    ) {
        let from = Rgb888::new(start[0], start[1], start[2]);
        let to = Rgb888::new(target[0], target[1], target[2]);
        let mut easer = ColorEaser::new(from).with_step(step);
        easer.set_target(to);

        let limit = (255 + step as usize - 1) / step as usize;
        let mut ticks = 0;
        while let Some(c) = easer.step() {
            ticks += 1;
            for (i, channel) in [c.r(), c.g(), c.b()].iter().enumerate() {
                let lo = start[i].min(target[i]);
                let hi = start[i].max(target[i]);
                assert!(*channel >= lo && *channel <= hi);
            }
            assert!(ticks <= limit);
        }
        assert_eq!(easer.current(), to);
    }
}
