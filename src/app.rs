use std::path::Path;

use blockfire_blocks::BlockAtlas;
use blockfire_game::{Game, GameConfig, GameError};
use blockfire_render_raylib::{
    BatchRender, FogShader, RenderError, SKY_COLOR, draw_bullets, draw_enemies, draw_focus,
    draw_hud, player_camera,
};
use raylib::prelude::*;

use crate::controls;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub struct App {
    game: Game,
    render: BatchRender,
    fov: f32,
    cursor_captured: bool,
}

impl App {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        cfg: &GameConfig,
        seed: u64,
        atlas: BlockAtlas,
        assets: &Path,
    ) -> Result<Self, AppError> {
        let texture = assets.join(atlas.texture_file());
        let fog = FogShader::load_with_base(rl, thread, assets);
        let render = BatchRender::load(rl, thread, &texture)?.with_fog(fog);
        let game = Game::with_atlas(cfg, seed, atlas)?;
        log::info!(
            "world ready: {} blocks, {} queued",
            game.world.len(),
            game.world.queue_len()
        );
        Ok(Self {
            game,
            render,
            fov: cfg.window.fov,
            cursor_captured: false,
        })
    }

    pub fn run(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<(), AppError> {
        while !rl.window_should_close() {
            self.step(rl, thread)?;
            self.draw(rl, thread)?;
        }
        log::info!("shutting down after {} ticks", self.game.ticks());
        Ok(())
    }

    fn step(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<(), AppError> {
        for ev in controls::poll(rl, self.game.player.pointer_locked) {
            self.game.push_event(ev);
        }
        self.game.tick(rl.get_frame_time())?;
        if self.game.player.pointer_locked != self.cursor_captured {
            if self.game.player.pointer_locked {
                rl.disable_cursor();
            } else {
                rl.enable_cursor();
            }
            self.cursor_captured = self.game.player.pointer_locked;
        }
        let rebuilt = self.render.sync(rl, thread, self.game.world.sink());
        if rebuilt > 0 {
            log::debug!("rebuilt {} sector meshes", rebuilt);
        }
        Ok(())
    }

    fn draw(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<(), AppError> {
        let focus = self.game.focused_block()?;
        let camera = player_camera(&self.game.player, self.fov);
        self.render.update_fog(camera.position);
        let (width, height) = (rl.get_screen_width(), rl.get_screen_height());
        let status = self.game.status_line();

        let mut d = rl.begin_drawing(thread);
        d.clear_background(SKY_COLOR);
        {
            let mut d3 = d.begin_mode3D(camera);
            self.render.draw(&mut d3);
            draw_enemies(&mut d3, &self.game.enemies);
            draw_bullets(&mut d3, &self.game.bullets);
            if let Some(hit) = focus {
                draw_focus(&mut d3, hit.block);
            }
        }
        draw_hud(&mut d, &status, width, height);
        Ok(())
    }
}
