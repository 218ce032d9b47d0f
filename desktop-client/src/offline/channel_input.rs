use tokio::sync::mpsc;
use snake_common::games::InputSource;
use snake_common::InputCommand;
use crate::state::ClientCommand;

/// Buffers commands arriving from the UI thread until the game loop polls them.
///
/// Draining stops at a score label so commands sent after it are applied on the next pass,
/// after the label.
pub struct ChannelInput {
    command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    pending: Vec<InputCommand>,
    pending_label: Option<Option<String>>,
    closed: bool,
}

impl ChannelInput {
    pub fn new(command_rx: mpsc::UnboundedReceiver<ClientCommand>) -> Self {
        Self {
            command_rx,
            pending: Vec::new(),
            pending_label: None,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn take_label(&mut self) -> Option<Option<String>> {
        self.pending_label.take()
    }

    /// Waits for the next command. Returns false once the UI asked to shut down
    /// or dropped its sender.
    pub async fn wait(&mut self) -> bool {
        match self.command_rx.recv().await {
            Some(command) => self.accept(command),
            None => self.closed = true,
        }
        !self.closed
    }

    fn accept(&mut self, command: ClientCommand) {
        match command {
            ClientCommand::Input(input) => self.pending.push(input),
            ClientCommand::LabelLastScore(label) => self.pending_label = Some(label),
            ClientCommand::Shutdown => self.closed = true,
        }
    }
}

impl InputSource for ChannelInput {
    fn poll_commands(&mut self) -> Vec<InputCommand> {
        while !self.closed && self.pending_label.is_none() {
            match self.command_rx.try_recv() {
                Ok(command) => self.accept(command),
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => self.closed = true,
            }
        }
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_drains_commands_in_order() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut input = ChannelInput::new(rx);

        tx.send(ClientCommand::Input(InputCommand::Up)).unwrap();
        tx.send(ClientCommand::Input(InputCommand::Left)).unwrap();

        assert_eq!(input.poll_commands(), vec![InputCommand::Up, InputCommand::Left]);
        assert!(input.poll_commands().is_empty());
        assert!(!input.is_closed());
    }

    #[test]
    fn test_shutdown_closes_input() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut input = ChannelInput::new(rx);

        tx.send(ClientCommand::Input(InputCommand::Pause)).unwrap();
        tx.send(ClientCommand::Shutdown).unwrap();
        tx.send(ClientCommand::Input(InputCommand::Down)).unwrap();

        assert_eq!(input.poll_commands(), vec![InputCommand::Pause]);
        assert!(input.is_closed());
    }

    #[test]
    fn test_dropped_sender_closes_input() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut input = ChannelInput::new(rx);
        drop(tx);

        assert!(input.poll_commands().is_empty());
        assert!(input.is_closed());
    }

    #[test]
    fn test_label_stops_draining_until_taken() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut input = ChannelInput::new(rx);

        tx.send(ClientCommand::Input(InputCommand::Left)).unwrap();
        tx.send(ClientCommand::LabelLastScore(Some("Ada".to_string()))).unwrap();
        tx.send(ClientCommand::Input(InputCommand::Restart)).unwrap();

        assert_eq!(input.poll_commands(), vec![InputCommand::Left]);
        assert_eq!(input.take_label(), Some(Some("Ada".to_string())));
        assert_eq!(input.take_label(), None);
        assert_eq!(input.poll_commands(), vec![InputCommand::Restart]);
    }

    #[tokio::test]
    async fn test_wait_buffers_received_command() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut input = ChannelInput::new(rx);

        tx.send(ClientCommand::Input(InputCommand::Right)).unwrap();
        assert!(input.wait().await);
        assert_eq!(input.poll_commands(), vec![InputCommand::Right]);

        tx.send(ClientCommand::Shutdown).unwrap();
        assert!(!input.wait().await);
    }
}
