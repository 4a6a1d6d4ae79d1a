use crate::{post_process_steps::PostProcessSteps, progress::ProgressCallback};
use russimp_sys::*;
use std::{
    cell::RefCell,
    ffi::{c_char, c_void, CStr},
    io::{Read, Seek, SeekFrom},
};

/// Share of the progress range covered by reading files, the rest belongs to post-processing.
const READ_PROGRESS_SHARE: f32 = 0.9;

pub const IMPORT_CANCELLED_MESSAGE: &str = "Import cancelled by progress callback";

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// The message left by the last failed [`read_file_with_progress`] on this thread.
pub fn last_error() -> Option<String> {
    LAST_ERROR.with(|last_error| last_error.borrow().clone())
}

fn set_last_error(message: Option<String>) {
    LAST_ERROR.with(|last_error| *last_error.borrow_mut() = message);
}

struct ImportProgress {
    callback: Option<ProgressCallback>,
    user_data: *mut c_void,
    reported: f32,
    is_cancelled: bool,
}

impl ImportProgress {
    fn report(&mut self, percentage: f32) -> bool {
        if self.is_cancelled {
            return false;
        }
        self.reported = self.reported.max(percentage.clamp(0.0, 1.0));
        let Some(callback) = self.callback else {
            return true;
        };
        log::trace!("Import progress: {}", self.reported);
        let should_continue = unsafe { callback(self.reported, self.user_data) };
        if !should_continue {
            log::trace!("Import cancelled at {}", self.reported);
            self.is_cancelled = true;
        }
        should_continue
    }
}

struct ProgressFile {
    file: std::fs::File,
    size: u64,
    progress: *mut ImportProgress,
}

unsafe fn progress_file<'a>(file: *mut aiFile) -> Option<&'a mut ProgressFile> {
    unsafe { file.as_ref()?.UserData.cast::<ProgressFile>().as_mut() }
}

unsafe extern "C" fn open_proc(
    file_io: *mut aiFileIO,
    path: *const c_char,
    mode: *const c_char,
) -> *mut aiFile {
    let Some(file_io) = (unsafe { file_io.as_ref() }) else {
        return std::ptr::null_mut();
    };
    let progress = file_io.UserData.cast::<ImportProgress>();
    let is_cancelled = unsafe { progress.as_ref() }.map_or(true, |x| x.is_cancelled);
    if is_cancelled || path.is_null() {
        return std::ptr::null_mut();
    }
    if !mode.is_null() {
        let mode = unsafe { CStr::from_ptr(mode) }.to_bytes();
        if mode.contains(&b'w') || mode.contains(&b'a') {
            return std::ptr::null_mut();
        }
    }
    let Ok(path) = unsafe { CStr::from_ptr(path) }.to_str() else {
        return std::ptr::null_mut();
    };
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(err) => {
            log::trace!("Can not open {path}, {err}");
            return std::ptr::null_mut();
        }
    };
    let size = match file.metadata() {
        Ok(metadata) if metadata.is_file() => metadata.len(),
        _ => return std::ptr::null_mut(),
    };
    let user_data = Box::into_raw(Box::new(ProgressFile {
        file,
        size,
        progress,
    }));
    Box::into_raw(Box::new(aiFile {
        ReadProc: Some(read_proc),
        WriteProc: Some(write_proc),
        TellProc: Some(tell_proc),
        FileSizeProc: Some(file_size_proc),
        SeekProc: Some(seek_proc),
        FlushProc: Some(flush_proc),
        UserData: user_data.cast(),
    }))
}

unsafe extern "C" fn close_proc(_: *mut aiFileIO, file: *mut aiFile) {
    if file.is_null() {
        return;
    }
    let file = unsafe { Box::from_raw(file) };
    let user_data = file.UserData.cast::<ProgressFile>();
    if !user_data.is_null() {
        let _ = unsafe { Box::from_raw(user_data) };
    }
}

unsafe extern "C" fn read_proc(
    file: *mut aiFile,
    buffer: *mut c_char,
    element_size: usize,
    count: usize,
) -> usize {
    let Some(progress_file) = (unsafe { progress_file(file) }) else {
        return 0;
    };
    let Some(progress) = (unsafe { progress_file.progress.as_mut() }) else {
        return 0;
    };
    if progress.is_cancelled || buffer.is_null() || element_size == 0 {
        return 0;
    }
    let Some(length) = element_size.checked_mul(count) else {
        return 0;
    };
    let buffer = unsafe { std::slice::from_raw_parts_mut(buffer.cast::<u8>(), length) };
    let mut filled = 0;
    while filled < length {
        match progress_file.file.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(err) => {
                log::warn!("{err}");
                break;
            }
        }
    }
    let position = progress_file.file.stream_position().unwrap_or(0);
    let fraction = if progress_file.size == 0 {
        1.0
    } else {
        (position as f64 / progress_file.size as f64).min(1.0) as f32
    };
    if !progress.report(fraction * READ_PROGRESS_SHARE) {
        return 0;
    }
    filled / element_size
}

unsafe extern "C" fn write_proc(_: *mut aiFile, _: *const c_char, _: usize, _: usize) -> usize {
    0
}

unsafe extern "C" fn tell_proc(file: *mut aiFile) -> usize {
    unsafe { progress_file(file) }
        .and_then(|x| x.file.stream_position().ok())
        .map_or(0, |x| x as usize)
}

unsafe extern "C" fn file_size_proc(file: *mut aiFile) -> usize {
    unsafe { progress_file(file) }.map_or(0, |x| x.size as usize)
}

unsafe extern "C" fn seek_proc(file: *mut aiFile, offset: usize, origin: aiOrigin) -> aiReturn {
    const SET: aiOrigin = aiOrigin_aiOrigin_SET;
    const CUR: aiOrigin = aiOrigin_aiOrigin_CUR;
    const END: aiOrigin = aiOrigin_aiOrigin_END;
    let Some(progress_file) = (unsafe { progress_file(file) }) else {
        return aiReturn_aiReturn_FAILURE;
    };
    // Relative offsets arrive as two's complement in an unsigned value.
    let position = match origin {
        SET => SeekFrom::Start(offset as u64),
        CUR => SeekFrom::Current(offset as i64),
        END => SeekFrom::End(offset as i64),
        _ => return aiReturn_aiReturn_FAILURE,
    };
    match progress_file.file.seek(position) {
        Ok(_) => aiReturn_aiReturn_SUCCESS,
        Err(_) => aiReturn_aiReturn_FAILURE,
    }
}

unsafe extern "C" fn flush_proc(_: *mut aiFile) {}

/// Imports `path` and reports progress in [0, 1] to `callback`.
///
/// Reading the files maps to the first 90 percent. The scene is then post-processed one step at a
/// time in engine order, with a report strictly between `0.9` and `1.0` after each step, and
/// `1.0` once every step has run. A `false` from `callback` cancels the import. Returns null on
/// failure, the reason is available from [`last_error`].
///
/// # Safety
///
/// `path` must be null or a valid NUL terminated string. `callback` is called with `user_data`
/// on this thread only, until this function returns. `props` must be null or a live store. The
/// returned scene must be released with `aiReleaseImport`.
pub unsafe extern "C" fn read_file_with_progress(
    path: *const c_char,
    flags: u32,
    callback: Option<ProgressCallback>,
    user_data: *mut c_void,
    props: *const aiPropertyStore,
) -> *const aiScene {
    set_last_error(None);
    if path.is_null() {
        set_last_error(Some("No file path".to_string()));
        return std::ptr::null();
    }
    log::trace!("Import begin, {}", unsafe { CStr::from_ptr(path) }.to_string_lossy());

    let mut progress = ImportProgress {
        callback,
        user_data,
        reported: 0.0,
        is_cancelled: false,
    };
    let mut file_io = aiFileIO {
        OpenProc: Some(open_proc),
        CloseProc: Some(close_proc),
        UserData: (&mut progress as *mut ImportProgress).cast(),
    };
    let mut scene = unsafe { aiImportFileExWithProperties(path, 0, &mut file_io, props) };
    let mut failure = None;
    if !scene.is_null() {
        let pipeline = PostProcessSteps::from_bits_retain(flags).pipeline();
        let count = pipeline.len() as f32 + 1.0;
        for (index, step) in pipeline.into_iter().enumerate() {
            if progress.is_cancelled {
                break;
            }
            log::trace!("Post-process {:?}", step);
            scene = unsafe { aiApplyPostProcessing(scene, step.bits()) };
            if scene.is_null() {
                // The engine has already released the scene.
                failure = Some(format!("Post-processing step {:?} failed", step));
                break;
            }
            let fraction = (index as f32 + 1.0) / count;
            progress.report(READ_PROGRESS_SHARE + (1.0 - READ_PROGRESS_SHARE) * fraction);
        }
    }
    if !scene.is_null() && (progress.is_cancelled || !progress.report(1.0)) {
        unsafe { aiReleaseImport(scene) };
        scene = std::ptr::null();
    }
    if scene.is_null() {
        let message = if progress.is_cancelled {
            IMPORT_CANCELLED_MESSAGE.to_string()
        } else {
            failure.unwrap_or_else(crate::get_assimp_error_string)
        };
        log::trace!("Import failed, {message}");
        set_last_error(Some(message));
    } else {
        log::trace!("Import end");
    }
    scene
}

#[cfg(test)]
mod test {
    use super::{last_error, read_file_with_progress, IMPORT_CANCELLED_MESSAGE};
    use crate::{post_process_steps::PostProcessSteps, test_support};
    use russimp_sys::aiReleaseImport;
    use std::ffi::{c_void, CString};

    unsafe extern "C" fn record(percentage: f32, user_data: *mut c_void) -> bool {
        let received = unsafe { &mut *user_data.cast::<Vec<f32>>() };
        received.push(percentage);
        true
    }

    unsafe extern "C" fn cancel(_: f32, _: *mut c_void) -> bool {
        false
    }

    unsafe extern "C" fn cancel_after_reading(percentage: f32, user_data: *mut c_void) -> bool {
        let received = unsafe { &mut *user_data.cast::<Vec<f32>>() };
        received.push(percentage);
        percentage <= 0.9
    }

    fn path_of(name: &str) -> CString {
        let path = test_support::write_triangle_obj(name);
        CString::new(path.to_string_lossy().as_bytes()).unwrap()
    }

    #[test]
    fn reports_monotonic_progress() {
        test_support::init_logger();
        let path = path_of("progress_io_monotonic");
        let mut received: Vec<f32> = vec![];
        let scene = unsafe {
            read_file_with_progress(
                path.as_ptr(),
                PostProcessSteps::Triangulate.bits(),
                Some(record),
                (&mut received as *mut Vec<f32>).cast(),
                std::ptr::null(),
            )
        };
        assert!(!scene.is_null());
        unsafe { aiReleaseImport(scene) };
        assert_eq!(last_error(), None);
        assert!(received.len() >= 2);
        assert!(received.iter().all(|x| (0.0..=1.0).contains(x)));
        assert!(received.windows(2).all(|x| x[0] <= x[1]));
        assert_eq!(received.last(), Some(&1.0));
    }

    #[test]
    fn cancellation_fails_the_import() {
        test_support::init_logger();
        let path = path_of("progress_io_cancel");
        let scene = unsafe {
            read_file_with_progress(
                path.as_ptr(),
                PostProcessSteps::Triangulate.bits(),
                Some(cancel),
                std::ptr::null_mut(),
                std::ptr::null(),
            )
        };
        assert!(scene.is_null());
        assert_eq!(last_error().as_deref(), Some(IMPORT_CANCELLED_MESSAGE));
    }

    #[test]
    fn missing_file_sets_last_error() {
        test_support::init_logger();
        let path = CString::new("/nonexistent/progress_io_missing.obj").unwrap();
        let scene = unsafe {
            read_file_with_progress(
                path.as_ptr(),
                0,
                None,
                std::ptr::null_mut(),
                std::ptr::null(),
            )
        };
        assert!(scene.is_null());
        let message = last_error().unwrap();
        assert!(!message.is_empty());
        assert_ne!(message, IMPORT_CANCELLED_MESSAGE);
    }

    #[test]
    fn post_processing_reports_each_step() {
        test_support::init_logger();
        let path = path_of("progress_io_steps");
        let flags = PostProcessSteps::TargetRealtimeQuality;
        let mut received: Vec<f32> = vec![];
        let scene = unsafe {
            read_file_with_progress(
                path.as_ptr(),
                flags.bits(),
                Some(record),
                (&mut received as *mut Vec<f32>).cast(),
                std::ptr::null(),
            )
        };
        assert!(!scene.is_null());
        let mesh = unsafe { &**(*scene).mMeshes };
        assert!(!mesh.mNormals.is_null());
        assert!(!mesh.mTangents.is_null());
        unsafe { aiReleaseImport(scene) };
        assert_eq!(last_error(), None);
        let post_processing: Vec<f32> = received
            .iter()
            .copied()
            .filter(|x| *x > 0.9 && *x < 1.0)
            .collect();
        assert_eq!(post_processing.len(), flags.pipeline().len());
        assert!(post_processing.windows(2).all(|x| x[0] < x[1]));
        assert!(received.windows(2).all(|x| x[0] <= x[1]));
        assert_eq!(received.last(), Some(&1.0));
    }

    #[test]
    fn cancellation_during_post_processing() {
        test_support::init_logger();
        let path = path_of("progress_io_steps_cancel");
        let mut received: Vec<f32> = vec![];
        let scene = unsafe {
            read_file_with_progress(
                path.as_ptr(),
                PostProcessSteps::TargetRealtimeQuality.bits(),
                Some(cancel_after_reading),
                (&mut received as *mut Vec<f32>).cast(),
                std::ptr::null(),
            )
        };
        assert!(scene.is_null());
        assert_eq!(last_error().as_deref(), Some(IMPORT_CANCELLED_MESSAGE));
        assert_eq!(received.iter().filter(|x| **x > 0.9).count(), 1);
        assert!(received.iter().all(|x| *x < 1.0));
    }
}
