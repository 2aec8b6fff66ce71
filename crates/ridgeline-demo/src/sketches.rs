//! The three sketches, driven headlessly with scripted input.

use std::error::Error;

use glam::Mat4;
use ridgeline_app::{FIXED_DT, FrameLoop, LoopControl};
use ridgeline_config::Config;
use ridgeline_heightfield::{GridParams, Heightfield, fault_rng};
use ridgeline_input::{
    FlightCommand, KeyboardState, RawKeyEvent, resolve_flight_command, resolve_orbit_command,
};
use ridgeline_mesh::{TerrainMesh, logo::LogoSketch, skybox::cube_mesh};
use ridgeline_scene::{
    Camera, FlightController, OrbitController, PITCH_RATE_DEG, ROLL_RATE_DEG, SceneState,
    ShadingMode,
};
use tracing::info;
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Scripted key transition: at `tick`, press or release `key`.
struct KeyScript {
    tick: u64,
    key: KeyCode,
    state: ElementState,
}

impl KeyScript {
    fn press(tick: u64, key: KeyCode) -> Self {
        Self {
            tick,
            key,
            state: ElementState::Pressed,
        }
    }

    fn release(tick: u64, key: KeyCode) -> Self {
        Self {
            tick,
            key,
            state: ElementState::Released,
        }
    }
}

fn apply_script(script: &[KeyScript], tick: u64, keyboard: &mut KeyboardState) {
    for entry in script.iter().filter(|entry| entry.tick == tick) {
        keyboard.process_raw(RawKeyEvent {
            key: PhysicalKey::Code(entry.key),
            state: entry.state,
            repeat: false,
        });
    }
}

/// Fly over fault-displaced terrain for `frames` fixed ticks.
pub fn run_flight(config: &Config, frames: u64) -> Result<(), Box<dyn Error>> {
    let extent = config.terrain.half_extent;
    let mut heightfield = Heightfield::new(GridParams {
        divisions: config.terrain.divisions,
        min_x: -extent,
        max_x: extent,
        min_y: -extent,
        max_y: extent,
    })?;
    heightfield.displace(
        config.terrain.iterations,
        config.terrain.delta,
        &mut fault_rng(config.terrain.seed),
    )?;
    heightfield.compute_normals()?;
    let mesh = TerrainMesh::from_heightfield(&heightfield)?;
    let (min_z, max_z) = heightfield.height_range();
    info!(
        vertices = mesh.vertices.len(),
        triangles = mesh.indices.len() / 3,
        min_z,
        max_z,
        "terrain ready"
    );

    let aspect = config.window.width as f32 / config.window.height as f32;
    let mut camera = Camera::flight_default(aspect);
    camera.fov_y = config.scene.fov_degrees.to_radians();
    let mut flight = FlightController::new();

    // Terrain model transform: pushed back and tilted toward the camera.
    let model = Mat4::from_translation(glam::Vec3::new(0.0, 0.0, -2.0))
        * Mat4::from_rotation_x((-75f32).to_radians());
    let mut scene = SceneState::new(&camera, model);
    scene.height_range = (min_z, max_z);
    scene.fog_enabled = config.scene.fog;
    scene.draw_mode = config.scene.draw_mode;
    info!(
        draw_mode = ?scene.draw_mode,
        fog = scene.fog_enabled,
        "scene configured"
    );

    // Climb, bank right, then throttle up.
    let script = [
        KeyScript::press(0, KeyCode::KeyW),
        KeyScript::release(120, KeyCode::KeyW),
        KeyScript::press(120, KeyCode::KeyD),
        KeyScript::release(240, KeyCode::KeyD),
        KeyScript::press(240, KeyCode::KeyZ),
    ];
    let mut keyboard = KeyboardState::new();

    let mut frame_loop = FrameLoop::new();
    while frame_loop.step(FIXED_DT, &mut |ctx| {
        apply_script(&script, ctx.tick_index, &mut keyboard);
        match resolve_flight_command(&keyboard) {
            Some(FlightCommand::PitchDown) => {
                flight.pitch(&mut camera, -PITCH_RATE_DEG.to_radians())
            }
            Some(FlightCommand::PitchUp) => flight.pitch(&mut camera, PITCH_RATE_DEG.to_radians()),
            Some(FlightCommand::RollRight) => flight.roll(&mut camera, ROLL_RATE_DEG.to_radians()),
            Some(FlightCommand::RollLeft) => flight.roll(&mut camera, -ROLL_RATE_DEG.to_radians()),
            Some(FlightCommand::Accelerate) => flight.accelerate(),
            Some(FlightCommand::Decelerate) => flight.decelerate(),
            None => {}
        }
        flight.advance(&mut camera);
        scene.update_matrices(&camera, model);
        keyboard.end_frame();

        if ctx.tick_index % 60 == 0 {
            info!(
                tick = ctx.tick_index,
                position = ?camera.position,
                speed = flight.speed(),
                "flight frame"
            );
        }
        if ctx.tick_index + 1 >= frames {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }) == LoopControl::Continue
    {}

    info!(ticks = frame_loop.tick_count(), "flight sketch finished");
    Ok(())
}

/// Jiggle and spin the logo for `frames` fixed ticks, paced off the wall
/// clock the way the on-screen animation runs.
pub fn run_logo(frames: u64) -> Result<(), Box<dyn Error>> {
    let logo = LogoSketch::new();
    info!(vertices = logo.vertex_count(), "logo ready");

    let mut rotation_deg = 0.0f32;
    let mut frame_loop = FrameLoop::new();
    frame_loop.run(|ctx| {
        rotation_deg = (rotation_deg + 1.0) % 360.0;
        let phase = ctx.sim_time as f32 * 6.0;
        let positions = logo.jiggled(phase);
        if ctx.tick_index % 60 == 0 {
            let center =
                positions.iter().copied().sum::<glam::Vec2>() / positions.len() as f32;
            info!(tick = ctx.tick_index, rotation_deg, ?center, "logo frame");
        }
        if ctx.tick_index + 1 >= frames {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    });

    info!(ticks = frame_loop.tick_count(), "logo sketch finished");
    Ok(())
}

/// Orbit the skybox viewer for `frames` fixed ticks, flipping the shading
/// mode halfway through.
pub fn run_skybox(frames: u64) -> Result<(), Box<dyn Error>> {
    let cube = cube_mesh(100.0);
    info!(
        corners = cube.positions.len(),
        indices = cube.indices.len(),
        "skybox ready"
    );

    let mut orbit = OrbitController::new();
    let mut mode = ShadingMode::default();
    let mut keyboard = KeyboardState::new();
    let script = [
        KeyScript::press(0, KeyCode::KeyD),
        KeyScript::release(frames / 2, KeyCode::KeyD),
        KeyScript::press(frames / 2, KeyCode::KeyW),
    ];

    let mut frame_loop = FrameLoop::new();
    while frame_loop.step(FIXED_DT, &mut |ctx| {
        apply_script(&script, ctx.tick_index, &mut keyboard);
        let (tilt, spin) = resolve_orbit_command(&keyboard);
        orbit.tilt(tilt);
        orbit.spin(spin);
        keyboard.end_frame();

        if ctx.tick_index == frames / 2 {
            mode.toggle();
            info!(?mode, "shading mode toggled");
        }
        if ctx.tick_index % 60 == 0 {
            let facing = orbit.model_matrix().transform_vector3(glam::Vec3::Z);
            info!(
                tick = ctx.tick_index,
                x_deg = orbit.x_deg,
                y_deg = orbit.y_deg,
                ?facing,
                "skybox frame"
            );
        }
        if ctx.tick_index + 1 >= frames {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }) == LoopControl::Continue
    {}

    info!(ticks = frame_loop.tick_count(), "skybox sketch finished");
    Ok(())
}
