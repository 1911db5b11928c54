use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fly_camera::traits::NoCursor;
use fly_camera::{Button, CameraConfig, CameraController, Controller, SensitivityCurve, Transform};
use glam::Vec2;

/// Held keys plus a steady pointer drag
struct Held {
    buttons: Vec<Button>,
    mouse: Vec2,
}

impl Controller for Held {
    fn is_down(&self, button: Button) -> bool {
        self.buttons.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.buttons
    }

    fn mouse_delta(&self) -> Vec2 {
        self.mouse
    }
}

/// First frame of a look: reports the right button edge
struct Pressing<'a>(&'a Held);

impl Controller for Pressing<'_> {
    fn is_down(&self, button: Button) -> bool {
        self.0.is_down(button)
    }

    fn get_down_keys(&self) -> &[Button] {
        self.0.get_down_keys()
    }

    fn was_pressed(&self, button: Button) -> bool {
        button == Button::MouseRight
    }
}

/// Benchmark: one frame with movement keys held and no look
fn bench_advance_moving(c: &mut Criterion) {
    let mut camera = CameraController::new(CameraConfig::default(), &Transform::IDENTITY);
    let input = Held {
        buttons: vec![Button::KeyW, Button::KeyD, Button::Shift],
        mouse: Vec2::ZERO,
    };

    c.bench_function("advance_moving", |b| {
        b.iter(|| black_box(camera.advance(black_box(1.0 / 60.0), &input, &mut NoCursor)))
    });
}

/// Benchmark: frame cost against sensitivity curve size while looking
fn bench_advance_looking(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_looking");

    for keys in [2usize, 16, 256] {
        let points: Vec<(f32, f32)> = (0..keys)
            .map(|i| (i as f32 * 0.1, 0.5 + i as f32 * 0.01))
            .collect();
        let config = CameraConfig {
            mouse_sensitivity_curve: SensitivityCurve::linear(&points),
            ..CameraConfig::default()
        };
        let mut camera = CameraController::new(config, &Transform::IDENTITY);

        // Enter look mode once so every measured frame rotates
        let mut press = Held {
            buttons: vec![Button::MouseRight],
            mouse: Vec2::ZERO,
        };
        camera.advance(0.0, &Pressing(&press), &mut NoCursor);
        press.mouse = Vec2::new(0.7, -0.3);

        group.bench_with_input(BenchmarkId::from_parameter(keys), &press, |b, input| {
            b.iter(|| black_box(camera.advance(black_box(1.0 / 144.0), input, &mut NoCursor)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_advance_moving, bench_advance_looking);
criterion_main!(benches);
