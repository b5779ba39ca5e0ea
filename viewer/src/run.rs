use std::io;

use crate::Session;
use crate::ui::TerminalView;

pub fn run_viewer(session: &mut Session) -> io::Result<()> {
    let mut view = TerminalView::new()?;
    view.draw(&session.render())?;

    loop {
        let Some(key) = view.wait_for_key()? else {
            continue;
        };

        let keep_going = session.handle_key(key).map_err(io::Error::other)?;
        if !keep_going {
            break;
        }

        view.draw(&session.render())?;
    }

    Ok(())
}
