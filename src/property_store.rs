use crate::convert::ConvertToAIString;
use russimp_sys::*;
use std::ffi::CStr;

/// Import properties handed to the engine, keys are in [`crate::config`].
pub struct PropertyStore {
    c: *mut aiPropertyStore,
}

impl PropertyStore {
    /// `None` when the engine can not allocate a store.
    pub fn new() -> Option<PropertyStore> {
        let c = unsafe { aiCreatePropertyStore() };
        if c.is_null() {
            log::warn!("Can not create a property store");
            return None;
        }
        Some(PropertyStore { c })
    }

    pub(crate) fn as_ptr(&self) -> *const aiPropertyStore {
        self.c
    }

    pub fn set_property_integer(&mut self, name: &CStr, value: i32) {
        unsafe { aiSetImportPropertyInteger(self.c, name.as_ptr(), value) }
    }

    pub fn set_property_bool(&mut self, name: &CStr, value: bool) {
        self.set_property_integer(name, if value { 1 } else { 0 });
    }

    pub fn set_property_float(&mut self, name: &CStr, value: f32) {
        unsafe { aiSetImportPropertyFloat(self.c, name.as_ptr(), value) }
    }

    pub fn set_property_string(&mut self, name: &CStr, value: &str) {
        let value = value.to_ai_string();
        unsafe { aiSetImportPropertyString(self.c, name.as_ptr(), &value) }
    }
}

impl Drop for PropertyStore {
    fn drop(&mut self) {
        unsafe { aiReleasePropertyStore(self.c) }
    }
}
