use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

/// Precomputed mapping from dest pixels to the nearest src pixel
pub struct ScaleLut {
    src_x: Vec<usize>,
    src_row: Vec<usize>, // offset of the src row start
}

impl ScaleLut {
    pub fn empty() -> Self {
        Self {
            src_x: Vec::new(),
            src_row: Vec::new(),
        }
    }

    pub fn dst_size(&self) -> (usize, usize) {
        (self.src_x.len(), self.src_row.len())
    }
}

pub fn build_scale_lut(dst_w: usize, dst_h: usize, src_w: usize, src_h: usize) -> ScaleLut {
    let sx = src_w as f32 / dst_w as f32;
    let sy = src_h as f32 / dst_h as f32;

    let src_x = (0..dst_w)
        .map(|x| ((x as f32 * sx) as usize).min(src_w.saturating_sub(1)))
        .collect();
    let src_row = (0..dst_h)
        .map(|y| ((y as f32 * sy) as usize).min(src_h.saturating_sub(1)) * src_w)
        .collect();

    ScaleLut { src_x, src_row }
}

/// Parallel nearest-neighbour stretch.
/// Rows are processed in parallel; walls stay hard-edged.
pub fn blit_nearest_stretch(dst: &mut [u32], dw: usize, src: &[u32], lut: &ScaleLut) {
    if dw == 0 {
        return;
    }
    dst.par_chunks_mut(dw).enumerate().for_each(|(y, dst_row)| {
        let row = lut.src_row[y];
        for (x, px) in dst_row.iter_mut().enumerate() {
            *px = src[row + lut.src_x[x]];
        }
    });
}
