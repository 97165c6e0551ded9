//! Headless demo: builds the viewport scene, optionally imports an OBJ
//! model in front of the camera, and flies the camera through a short
//! scripted input sequence while logging scene statistics.
//!
//! Usage: `meshcam [OPTIONS.toml] [MODEL.obj]` (either order).

use std::path::{Path, PathBuf};

use glam::Vec3;
use meshcam::camera::{Camera, CameraController};
use meshcam::import::load_obj;
use meshcam::input::{InputEvent, InputState, MouseButton};
use meshcam::options::Options;
use meshcam::scene::Scene;
use meshcam::util::FrameTiming;
use meshcam::MeshcamError;

const TARGET_FPS: u32 = 60;
const FLY_TICKS: u32 = 90;
const GROUND_TEXTURE: &str = "textures/checker_board_128x128.png";

#[derive(Debug, Default)]
struct Args {
    options: Option<PathBuf>,
    model: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    for arg in std::env::args().skip(1) {
        let path = PathBuf::from(&arg);
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => args.options = Some(path),
            Some("obj") => args.model = Some(path),
            _ => {
                return Err(format!(
                    "unrecognised argument {arg:?}; usage: meshcam \
                     [OPTIONS.toml] [MODEL.obj]"
                ))
            }
        }
    }
    Ok(args)
}

/// Input for one tick of the fly-through: walk forward, then turn while
/// dragging the mouse, then let go.
fn scripted_events(tick: u32) -> Vec<InputEvent> {
    match tick {
        0 => vec![InputEvent::key_pressed("KeyW")],
        30 => vec![
            InputEvent::key_released("KeyW"),
            InputEvent::key_pressed("ArrowLeft"),
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            },
            InputEvent::CursorMoved { x: 0.0, y: 0.0 },
        ],
        31..=59 => vec![InputEvent::CursorMoved {
            x: (tick - 30) as f32 * 2.0,
            y: 0.0,
        }],
        60 => vec![InputEvent::FocusLost],
        _ => Vec::new(),
    }
}

fn run(args: &Args) -> Result<(), MeshcamError> {
    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    log::info!("asset root: {}", options.paths.asset_root.display());

    let mut camera = Camera::new(options.camera.start_position());
    let projection = options.camera.projection(4.0 / 3.0);
    let controller =
        CameraController::new(&options.camera, options.keybindings.clone());

    let mut scene = Scene::new(options.paths.clone());
    scene.add_ground_plane(
        options.geometry.ground_half_extent,
        Some(Path::new(GROUND_TEXTURE)),
    );
    scene.add_sphere(
        options.geometry.sphere_size,
        options.geometry.sphere_level,
        Vec3::new(0.0, 2.0, 0.0),
    );
    if let Some(model) = &args.model {
        let meshes = load_obj(model, &options.paths)?;
        scene.add_meshes_in_front_of(meshes, &camera);
    }
    scene.set_animating(true);

    let mut upload_bytes = 0usize;
    for object in scene.objects() {
        let buffers = object.mesh().to_buffers()?;
        upload_bytes += buffers.vertex_bytes().len() + buffers.index_bytes().len();
    }
    log::info!(
        "scene: {} objects, {} vertices, {} faces, {upload_bytes} bytes to upload",
        scene.objects().len(),
        scene.vertex_count(),
        scene.face_count()
    );

    let mut input = InputState::new();
    let mut timing = FrameTiming::new(TARGET_FPS);
    let mut tick = 0;
    while tick < FLY_TICKS {
        if !timing.should_update() {
            std::thread::sleep(std::time::Duration::from_millis(1));
            continue;
        }
        for event in scripted_events(tick) {
            input.handle_event(&event);
        }
        let dt = timing.end_frame();
        controller.update(&mut camera, &mut input, dt);
        scene.tick();
        tick += 1;
    }

    let pv = camera.view_projection(&projection);
    let in_front = scene
        .objects()
        .iter()
        .filter(|o| o.model_view_projection(pv).w_axis.w > 0.0)
        .count();

    log::info!(
        "camera at {} looking {} (yaw {:.1}, pitch {:.1}), {in_front} \
         objects in front, {:.1} fps",
        camera.position(),
        camera.view_direction(),
        camera.yaw(),
        camera.pitch(),
        timing.fps()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
