// Host-side tests for the particle field and its draw-command generation.

use glowring_core::constants::*;
use glowring_core::{DrawCmd, DrawRecorder, Paint, ParticleField, SpectrumFrame, ViewportState};
use std::f32::consts::TAU;

fn viewport() -> ViewportState {
    ViewportState::measure(800.0, 400.0, 1.0)
}

fn ramp_bins() -> Vec<u8> {
    (0..128u32).map(|i| (i * 2) as u8).collect()
}

#[test]
fn create_produces_requested_count() {
    for count in [1usize, 3, 24, 100] {
        let field = ParticleField::create(count, 128, 1);
        assert_eq!(field.len(), count);
    }
}

#[test]
fn angle_offsets_partition_the_circle_uniformly() {
    for count in [1usize, 2, 24, 97] {
        let field = ParticleField::create(count, 128, 7);
        let step = TAU / count as f32;
        for (i, p) in field.particles().iter().enumerate() {
            let expected = i as f32 * step;
            assert!(
                (p.angle_offset - expected).abs() < 1e-4,
                "count={count} particle {i}: {} vs {expected}",
                p.angle_offset
            );
            assert!(p.angle_offset < TAU);
        }
    }
}

#[test]
fn bin_indices_are_floor_of_the_bin_fraction() {
    let field = ParticleField::create(4, 128, 0);
    let bins: Vec<usize> = field.particles().iter().map(|p| p.bin_index).collect();
    assert_eq!(bins, vec![0, 32, 64, 96]);

    // awkward ratios never index past the end
    let field = ParticleField::create(7, 128, 0);
    for p in field.particles() {
        assert!(p.bin_index < 128);
    }
}

#[test]
fn render_is_deterministic_for_identical_inputs() {
    let field = ParticleField::create(24, 128, 42);
    let bins = ramp_bins();
    let frame = SpectrumFrame::new(&bins);
    let vp = viewport();

    let mut first = DrawRecorder::new();
    let mut second = DrawRecorder::new();
    field.render(&frame, 1234.5, &vp, &mut first);
    field.render(&frame, 1234.5, &vp, &mut second);

    assert!(!first.commands.is_empty());
    assert_eq!(first.commands, second.commands);
}

#[test]
fn same_seed_reproduces_the_field() {
    let bins = ramp_bins();
    let frame = SpectrumFrame::new(&bins);
    let vp = viewport();

    let mut a = DrawRecorder::new();
    let mut b = DrawRecorder::new();
    ParticleField::create(16, 128, 9).render(&frame, 500.0, &vp, &mut a);
    ParticleField::create(16, 128, 9).render(&frame, 500.0, &vp, &mut b);
    assert_eq!(a.commands, b.commands);

    let mut c = DrawRecorder::new();
    ParticleField::create(16, 128, 10).render(&frame, 500.0, &vp, &mut c);
    assert_ne!(a.commands, c.commands);
}

#[test]
fn command_order_is_wash_then_dots_then_halo() {
    let field = ParticleField::create(5, 128, 3);
    let bins = ramp_bins();
    let frame = SpectrumFrame::new(&bins);
    let mut rec = DrawRecorder::new();
    field.render(&frame, 0.0, &viewport(), &mut rec);

    // wash + two fills per dot + halo
    assert_eq!(rec.commands.len(), 1 + 2 * 5 + 1);
    assert!(matches!(rec.commands[0], DrawCmd::Vignette { .. }));
    assert!(matches!(
        rec.commands.last(),
        Some(DrawCmd::StrokeCircle { .. })
    ));
    for cmd in &rec.commands[1..rec.commands.len() - 1] {
        assert!(matches!(cmd, DrawCmd::FillCircle { .. }));
    }
}

#[test]
fn silent_frame_radius_carries_no_amplitude_term() {
    let field = ParticleField::create(24, 128, 9);
    let silent = [0u8; 128];
    let frame = SpectrumFrame::new(&silent);
    let vp = viewport();
    let elapsed_ms = 250.0_f64;

    let mut rec = DrawRecorder::new();
    field.render(&frame, elapsed_ms, &vp, &mut rec);

    let center = vp.center();
    for (i, p) in field.particles().iter().enumerate() {
        // the glow dot of particle i is the first of its pair, after the wash
        let DrawCmd::FillCircle { center: pos, .. } = rec.commands[1 + 2 * i] else {
            panic!("expected a fill at index {}", 1 + 2 * i);
        };
        let expected = p.base_radius
            * (1.0 + (elapsed_ms as f32 / IDLE_PERIOD_MS + p.phase).sin() * IDLE_WEIGHT);
        assert!(
            (pos.distance(center) - expected).abs() < 1e-2,
            "particle {i}: {} vs {expected}",
            pos.distance(center)
        );
    }
}

#[test]
fn amplitude_raises_size_lightness_and_hue() {
    let field = ParticleField::create(1, 128, 5);
    let vp = viewport();

    let silent = [0u8; 128];
    let mut quiet = DrawRecorder::new();
    field.render(&SpectrumFrame::new(&silent), 0.0, &vp, &mut quiet);

    let mut loud_bins = [0u8; 128];
    loud_bins[0] = 255;
    let mut loud = DrawRecorder::new();
    field.render(&SpectrumFrame::new(&loud_bins), 0.0, &vp, &mut loud);

    let dot = |rec: &DrawRecorder| match rec.commands[1] {
        DrawCmd::FillCircle {
            radius,
            paint,
            glow_blur,
            ..
        } => (radius, paint, glow_blur),
        _ => panic!("expected the glow dot at index 1"),
    };
    let (quiet_size, quiet_paint, quiet_blur) = dot(&quiet);
    let (loud_size, loud_paint, loud_blur) = dot(&loud);

    let p = &field.particles()[0];
    assert_eq!(quiet_size, (p.size_base).max(SIZE_FLOOR));
    assert_eq!(loud_size, (p.size_base + SIZE_GAIN).max(SIZE_FLOOR));
    assert!(loud_blur > quiet_blur);

    let (Paint::Hsl { hue: qh, lightness: ql, .. }, Paint::Hsl { hue: lh, lightness: ll, .. }) =
        (quiet_paint, loud_paint)
    else {
        panic!("dots are painted in hsl");
    };
    assert!((ql - LIGHTNESS_BASE_PCT).abs() < 1e-4);
    assert!((ll - (LIGHTNESS_BASE_PCT + LIGHTNESS_SPAN_PCT)).abs() < 1e-4);
    assert!((lh - (qh + HUE_SPREAD_DEG).rem_euclid(360.0)).abs() < 1e-3);
}

#[test]
fn halo_tracks_average_amplitude() {
    let field = ParticleField::create(8, 128, 2);
    let vp = viewport();

    let silent = [0u8; 128];
    let mut quiet = DrawRecorder::new();
    field.render(&SpectrumFrame::new(&silent), 0.0, &vp, &mut quiet);

    let loud_bins = [255u8; 128];
    let mut loud = DrawRecorder::new();
    field.render(&SpectrumFrame::new(&loud_bins), 0.0, &vp, &mut loud);

    let halo = |rec: &DrawRecorder| match *rec.commands.last().unwrap() {
        DrawCmd::StrokeCircle {
            radius, line_width, ..
        } => (radius, line_width),
        _ => panic!("halo is the last command"),
    };
    let (quiet_radius, quiet_width) = halo(&quiet);
    let (loud_radius, loud_width) = halo(&loud);

    assert!((quiet_radius - HALO_RADIUS_BASE).abs() < 1e-4);
    assert!((loud_radius - (HALO_RADIUS_BASE + HALO_RADIUS_GAIN)).abs() < 1e-3);
    assert!(loud_width > quiet_width);
}

#[test]
fn quiescent_render_skips_the_dot_pass() {
    let field = ParticleField::create(24, 128, 4);
    let silent = [0u8; 128];
    let mut rec = DrawRecorder::new();
    field.render_quiescent(&SpectrumFrame::new(&silent), &viewport(), &mut rec);

    assert_eq!(rec.commands.len(), 2);
    assert!(matches!(rec.commands[0], DrawCmd::Vignette { .. }));
    assert!(matches!(rec.commands[1], DrawCmd::StrokeCircle { .. }));
}
