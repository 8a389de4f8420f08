/// Terminal-based ASCII driver for the scene3d demo
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use log::{debug, info, warn};
use scene3d_core::{checked, Frame, Mesh, SceneState};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod controls;
pub mod renderer;

pub use controls::{apply_key, Action};
pub use renderer::AsciiRenderer;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

/// Runtime settings of the terminal driver
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fps: u32,
    pub scene: SceneState,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            scene: SceneState::new(),
        }
    }
}

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    mesh: Mesh,
    scene: SceneState,
    renderer: AsciiRenderer,
    frame_time: Duration,
    running: bool,
    last_frame: Option<Frame>,
    last_tick: Instant,
    fps_window: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, config: AppConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(mesh, config, width as usize, height as usize))
    }

    pub fn with_size(mesh: Mesh, config: AppConfig, width: usize, height: usize) -> Self {
        let now = Instant::now();
        Self {
            mesh,
            scene: config.scene,
            renderer: AsciiRenderer::new(width, height),
            frame_time: Duration::from_millis(1000 / u64::from(config.fps.max(1))),
            running: true,
            last_frame: None,
            last_tick: now,
            fps_window: now,
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        info!("terminal driver started ({} triangles)", self.mesh.triangles.len());

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Handle input
            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            let dt = frame_start.duration_since(self.last_tick).as_secs_f32();
            self.last_tick = frame_start;
            self.scene.step(dt);

            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.fps_window).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.fps_window).as_secs_f32();
                self.frame_count = 0;
                self.fps_window = now;
            }
        }

        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                if apply_key(&mut self.scene, code) == Action::Quit {
                    self.running = false;
                }
            }
            Event::Resize(width, height) => {
                debug!("resize to {width}x{height}");
                self.renderer.resize(width as usize, height as usize);
            }
            _ => {}
        }
    }

    fn aspect(&self) -> f32 {
        self.renderer.width() as f32 / (self.renderer.height().max(1) as f32 * CELL_ASPECT)
    }

    /// Compute this frame's matrices, keeping the previous frame when the
    /// camera has no valid view.
    pub fn update_frame(&mut self) -> Option<&Frame> {
        let aspect = self.aspect();
        let camera = self.scene.active_camera(aspect);
        match checked::try_look_at(camera.position, camera.target, camera.up)
            .and_then(|matrix| checked::try_inverse(&matrix))
        {
            Ok(_) => self.last_frame = Some(self.scene.frame(aspect)),
            Err(err) => warn!("keeping previous frame: {err}"),
        }
        self.last_frame.as_ref()
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        if let Some(frame) = self.update_frame().cloned() {
            for mvp in &frame.models {
                self.renderer.render_mesh(&self.mesh, mvp);
            }
        }

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let model = &self.scene.model;
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "scene3d | FPS: {:.1} | {:?} {:?} {:?} | t=({:.0},{:.0},{:.0}) zoom={:.1}",
                self.fps,
                self.scene.animation(),
                self.scene.view,
                model.path,
                model.translation[0],
                model.translation[1],
                model.translation[2],
                self.scene.zoom,
            )),
            cursor::MoveTo(0, 1),
            Print(controls::HELP),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
