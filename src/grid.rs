use image::{Rgb, RgbImage};

/// Direction of a line through a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

/// Row-major two dimensional storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Returns `None` if `data` doesn't hold exactly `width * height` cells.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Option<Self> {
        if width.checked_mul(height)? != data.len() {
            return None;
        }
        Some(Grid {
            width,
            height,
            data,
        })
    }

    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Grid {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            self.data.get(y * self.width + x)
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Number of lines along `axis`.
    pub fn line_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        }
    }

    /// A mutable view of row or column `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Grid::line_count`].
    pub fn line_mut(&mut self, axis: Axis, index: usize) -> LineMut<'_, T> {
        assert!(
            index < self.line_count(axis),
            "{:?} {} out of bounds for a {}x{} grid",
            axis,
            index,
            self.width,
            self.height
        );
        let (offset, stride, len) = match axis {
            Axis::Row => (index * self.width, 1, self.width),
            Axis::Column => (index, self.width, self.height),
        };
        LineMut {
            data: &mut self.data,
            offset,
            stride,
            len,
        }
    }

    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl Grid<Rgb<u8>> {
    pub fn from_image(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Grid {
            width: width as usize,
            height: height as usize,
            data: image.pixels().copied().collect(),
        }
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.data[y as usize * self.width + x as usize]
        })
    }
}

/// A row or column of a [`Grid`], addressed through index arithmetic on the
/// backing storage. Writes go straight to the grid.
pub struct LineMut<'a, T> {
    data: &'a mut [T],
    offset: usize,
    stride: usize,
    len: usize,
}

impl<'a, T> LineMut<'a, T> {
    /// A line over a whole contiguous slice.
    pub fn from_slice(data: &'a mut [T]) -> Self {
        let len = data.len();
        LineMut {
            data,
            offset: 0,
            stride: 1,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn position(&self, idx: usize) -> usize {
        debug_assert!(idx < self.len);
        self.offset + idx * self.stride
    }

    #[inline]
    pub fn get(&self, idx: usize) -> &T {
        &self.data[self.position(idx)]
    }

    #[inline]
    pub fn set(&mut self, idx: usize, value: T) {
        let pos = self.position(idx);
        self.data[pos] = value;
    }

    pub fn iter<'this>(&'this self) -> impl Iterator<Item = &'this T> + 'this {
        (0..self.len).map(move |idx| self.get(idx))
    }
}
