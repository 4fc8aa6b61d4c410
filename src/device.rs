//! Virtual keyboard that receives the translated clicks.

use evdevil::event::{Key, KeyEvent, KeyState};
use evdevil::uinput::UinputDevice;
use evdevil::{Bus, InputId};

use crate::event_loop::KeySink;
use crate::keylist::KeyList;

pub struct VirtualKeyboard {
    uinput: UinputDevice,
}

impl VirtualKeyboard {
    /// Create a uinput keyboard advertising every resolved key.
    pub fn create(name: &str, keys: &KeyList) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let capabilities = keys.capabilities();
        log::info!("Creating uinput keyboard '{}' with {} keys", name, capabilities.len());

        let uinput = UinputDevice::builder()?
            .with_input_id(InputId::new(Bus::from_raw(0x06), 0x1d6b, 0xcec0, 1))?
            .with_keys(capabilities)?
            .build(name)?;

        if let Ok(sysname) = uinput.sysname() {
            log::info!("Keyboard ready: /sys/devices/virtual/input/{}", sysname.to_string_lossy());
        }

        // Give udev a moment before the first event arrives.
        std::thread::sleep(std::time::Duration::from_secs(1));

        Ok(Self { uinput })
    }
}

impl KeySink for VirtualKeyboard {
    fn click(&mut self, key: Key) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.uinput.write_events(&[KeyEvent::new(key, KeyState::PRESSED).into()])?;
        self.uinput.write_events(&[KeyEvent::new(key, KeyState::RELEASED).into()])?;
        Ok(())
    }
}
