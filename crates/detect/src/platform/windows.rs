//! Windows quiet hours and focus assist detection.

use crate::error::{ProbeError, ProbeResult};
use crate::focus_assist::{windows_dnd_active, FocusAssistProfile};
use std::ffi::c_void;
use windows::Win32::UI::Shell::{SHQueryUserNotificationState, QUNS_QUIET_TIME};

/// WNF state name (`WNF_SHEL_QUIETHOURS_ACTIVE_PROFILE_CHANGED`) holding the
/// active focus-assist profile.
#[repr(C)]
struct WnfStateName {
    data: [u32; 2],
}

const WNF_SHEL_QUIETHOURS_ACTIVE_PROFILE_CHANGED: WnfStateName = WnfStateName {
    data: [0xA3BF_1C75, 0x0D83_063E],
};

#[link(name = "ntdll")]
extern "system" {
    fn NtQueryWnfStateData(
        state_name: *const WnfStateName,
        type_id: *const c_void,
        explicit_scope: *const c_void,
        change_stamp: *mut u32,
        buffer: *mut c_void,
        buffer_size: *mut u32,
    ) -> i32;
}

/// Combines the shell's quiet-time state with the focus-assist profile.
#[derive(Debug, Default)]
pub struct WindowsProbe;

impl WindowsProbe {
    pub fn new() -> Self {
        Self
    }

    pub async fn is_dnd_active(&self) -> bool {
        let quiet_hours = query_quiet_hours().unwrap_or(false);
        let profile = query_focus_assist()
            .map(FocusAssistProfile::from_raw)
            .unwrap_or(FocusAssistProfile::Unsupported);

        windows_dnd_active(quiet_hours, profile)
    }
}

fn query_quiet_hours() -> ProbeResult<bool> {
    let state = unsafe { SHQueryUserNotificationState() }?;
    Ok(state == QUNS_QUIET_TIME)
}

/// Builds without focus assist have no such WNF state and fail here.
fn query_focus_assist() -> ProbeResult<u32> {
    let mut change_stamp: u32 = 0;
    let mut profile: u32 = 0;
    let mut size = std::mem::size_of::<u32>() as u32;

    let status = unsafe {
        NtQueryWnfStateData(
            &WNF_SHEL_QUIETHOURS_ACTIVE_PROFILE_CHANGED,
            std::ptr::null(),
            std::ptr::null(),
            &mut change_stamp,
            (&mut profile as *mut u32).cast(),
            &mut size,
        )
    };

    if status < 0 {
        return Err(ProbeError::Ntstatus(status));
    }
    if size == 0 {
        return Err(ProbeError::Unsupported);
    }

    Ok(profile)
}
