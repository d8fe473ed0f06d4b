#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

pub mod managers;
pub mod services;
pub mod storage;

use minmins_common::*;

use crate::managers::{FaceManager, FaceRenderer};

/// Run the face. Only startup failures return.
///
/// Events are handled one at a time; at most one frame is drawn per event.
pub async fn face_main<P: Platform>(
    ctx: PlatformContext<P>,
    config: FaceConfig,
    events: FaceEventReceiver<'_, P::RawMutex>,
) -> SystemResult<()> {
    info!("minmins face starting...");

    let PlatformContext {
        storage,
        haptic,
        connection,
        clock,
        mut display,
    } = ctx;

    let mut face = FaceManager::new(&config, storage, haptic, connection, clock);
    face.initialize().await?;
    redraw(&mut face, &mut display);

    info!("Main loop started");

    loop {
        let event = events.receive().await;
        if let Err(e) = face.handle_event(event).await {
            error!("Failed to handle event: {:?}", e);
        }
        redraw(&mut face, &mut display);
    }
}

fn redraw<S, H, C, W, D>(face: &mut FaceManager<S, H, C, W>, display: &mut D)
where
    S: SettingsStorage,
    H: HapticDriver,
    C: ConnectionMonitor,
    W: WallClock,
    D: FaceDisplay,
{
    let dirty = face.take_dirty();
    match FaceRenderer::draw(&face.view(), dirty, display) {
        Ok(true) => {
            if let Err(e) = display.flush() {
                error!("Failed to flush display: {:?}", DriverError(&e));
            }
        }
        Ok(false) => {}
        Err(e) => error!("Failed to draw face: {:?}", DriverError(&e)),
    }
}
