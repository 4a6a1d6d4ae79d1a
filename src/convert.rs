use russimp_sys::{aiColor4D, aiMatrix4x4, aiQuaternion, aiString, aiVector3D};

pub(crate) trait ConvertToMat4 {
    fn to_mat4(&self) -> glam::Mat4;
}

pub(crate) trait ConvertToString {
    fn to_text(&self) -> Option<String>;
}

pub(crate) trait ConvertToVec4 {
    fn to_vec4(&self) -> glam::Vec4;
}

pub(crate) trait ConvertToVec3 {
    fn to_vec3(&self) -> glam::Vec3;
}

pub(crate) trait ConvertToQuat {
    fn to_quat(&self) -> glam::Quat;
}

pub(crate) trait ConvertToAIString {
    fn to_ai_string(&self) -> aiString;
}

impl ConvertToVec4 for aiColor4D {
    fn to_vec4(&self) -> glam::Vec4 {
        glam::vec4(self.r, self.g, self.b, self.a)
    }
}

impl ConvertToVec3 for aiVector3D {
    fn to_vec3(&self) -> glam::Vec3 {
        glam::vec3(self.x, self.y, self.z)
    }
}

impl ConvertToQuat for aiQuaternion {
    fn to_quat(&self) -> glam::Quat {
        glam::quat(self.x, self.y, self.z, self.w)
    }
}

impl ConvertToMat4 for aiMatrix4x4 {
    // aiMatrix4x4 is row major, glam is column major.
    fn to_mat4(&self) -> glam::Mat4 {
        glam::mat4(
            glam::vec4(self.a1, self.b1, self.c1, self.d1),
            glam::vec4(self.a2, self.b2, self.c2, self.d2),
            glam::vec4(self.a3, self.b3, self.c3, self.d3),
            glam::vec4(self.a4, self.b4, self.c4, self.d4),
        )
    }
}

impl ConvertToString for aiString {
    fn to_text(&self) -> Option<String> {
        ai_string_to_string(self)
    }
}

/// Decodes exactly `length` bytes of the inline buffer as UTF-8.
///
/// The trailing NUL is never consulted. An empty string and a string that is not valid UTF-8
/// are both reported as `None`.
pub fn ai_string_to_string(ai_string: &aiString) -> Option<String> {
    let length = (ai_string.length as usize).min(ai_string.data.len());
    if length == 0 {
        return None;
    }
    let bytes =
        unsafe { std::slice::from_raw_parts(ai_string.data.as_ptr() as *const u8, length) };
    match std::str::from_utf8(bytes) {
        Ok(text) => Some(text.to_string()),
        Err(err) => {
            log::trace!("Discard malformed native string, {err}");
            None
        }
    }
}

/// Copies `count` elements starting at `raw_source`.
///
/// A null `raw_source` yields an empty vector, whatever `count` says.
pub(crate) fn copy_array<T, U, F>(raw_source: *const T, count: u32, f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    if count == 0 {
        return vec![];
    }
    if raw_source.is_null() {
        log::warn!("Native array reports {count} items but has no storage");
        return vec![];
    }
    let slice = unsafe { std::slice::from_raw_parts(raw_source, count as usize) };
    slice.iter().map(f).collect()
}

/// Same as [`copy_array`] for arrays of pointers, null entries are skipped.
pub(crate) fn copy_pointer_array<T, U, F>(
    raw_source: *const *mut T,
    count: u32,
    mut f: F,
) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let items: Vec<Option<U>> = copy_array(raw_source, count, |item| {
        unsafe { (*item).as_ref() }.map(&mut f)
    });
    items.into_iter().flatten().collect()
}

impl ConvertToAIString for str {
    // Longer text is cut at the last char boundary that leaves room for the NUL.
    fn to_ai_string(&self) -> aiString {
        let mut ai_string = aiString {
            length: 0,
            data: [0; 1024],
        };
        let mut length = self.len().min(ai_string.data.len() - 1);
        while !self.is_char_boundary(length) {
            length -= 1;
        }
        for (dst, src) in ai_string.data.iter_mut().zip(&self.as_bytes()[..length]) {
            *dst = *src as _;
        }
        ai_string.length = length as _;
        ai_string
    }
}

#[cfg(test)]
pub(crate) fn make_ai_string(text: &str) -> aiString {
    text.to_ai_string()
}

#[cfg(test)]
mod test {
    use super::{
        ai_string_to_string, copy_array, copy_pointer_array, make_ai_string, ConvertToAIString,
        ConvertToMat4,
    };
    use russimp_sys::{aiMatrix4x4, aiString};

    #[test]
    fn decode_recovers_text() {
        let text = "Hips/Spine.001 骨";
        let ai_string = make_ai_string(text);
        assert_eq!(ai_string_to_string(&ai_string).as_deref(), Some(text));
    }

    #[test]
    fn zero_length_is_absent() {
        let mut ai_string = make_ai_string("ignored");
        ai_string.length = 0;
        assert_eq!(ai_string_to_string(&ai_string), None);
    }

    #[test]
    fn decode_ignores_bytes_past_length() {
        let mut ai_string = make_ai_string("WalkCycle");
        ai_string.length = 4;
        assert_eq!(ai_string_to_string(&ai_string).as_deref(), Some("Walk"));

        let mut no_terminator = aiString {
            length: 3,
            data: [b'x' as _; 1024],
        };
        no_terminator.data[0] = b'a' as _;
        assert_eq!(ai_string_to_string(&no_terminator).as_deref(), Some("axx"));
    }

    #[test]
    fn invalid_utf8_is_absent() {
        let mut ai_string = make_ai_string("ab");
        ai_string.data[1] = 0xC3u8 as _;
        ai_string.data[2] = 0x28u8 as _;
        ai_string.length = 3;
        assert_eq!(ai_string_to_string(&ai_string), None);
    }

    #[test]
    fn length_is_clamped_to_capacity() {
        let ai_string = aiString {
            length: u32::MAX as _,
            data: [b'z' as _; 1024],
        };
        assert_eq!(ai_string_to_string(&ai_string).map(|x| x.len()), Some(1024));
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        let text = "é".repeat(600);
        let ai_string = text.as_str().to_ai_string();
        assert_eq!(ai_string.length, 1022);
        assert_eq!(ai_string.data[1023], 0);
        assert_eq!(ai_string_to_string(&ai_string), Some("é".repeat(511)));
    }

    #[test]
    fn null_array_with_count_is_empty() {
        let copied: Vec<u32> = copy_array(std::ptr::null::<u32>(), 12, |x| *x);
        assert!(copied.is_empty());

        let source = vec![1u32, 2, 3];
        let copied: Vec<u32> = copy_array(source.as_ptr(), source.len() as u32, |x| x * 2);
        assert_eq!(copied, vec![2, 4, 6]);
    }

    #[test]
    fn pointer_array_skips_null_entries() {
        let mut a = 7u32;
        let mut b = 9u32;
        let pointers: Vec<*mut u32> = vec![&mut a as *mut u32, std::ptr::null_mut(), &mut b];
        let copied: Vec<u32> = copy_pointer_array(pointers.as_ptr(), 3, |x| *x);
        assert_eq!(copied, vec![7, 9]);
    }

    #[test]
    fn matrix_translation_lands_in_last_column() {
        let mut matrix: aiMatrix4x4 = unsafe { std::mem::zeroed() };
        matrix.a1 = 1.0;
        matrix.b2 = 1.0;
        matrix.c3 = 1.0;
        matrix.d4 = 1.0;
        matrix.a4 = 3.0;
        matrix.b4 = 4.0;
        matrix.c4 = 5.0;
        let mat4 = matrix.to_mat4();
        assert_eq!(mat4.w_axis, glam::vec4(3.0, 4.0, 5.0, 1.0));
        assert_eq!(
            mat4.transform_point3(glam::Vec3::ZERO),
            glam::vec3(3.0, 4.0, 5.0)
        );
    }
}
