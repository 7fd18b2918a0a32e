use wgpu::{Buffer, BufferUsages, Device, Queue};

use crate::config::{DISCRETENESS_SAMPLES, DISPLAY_DEBT_MAX, RATE_SAMPLES};
use crate::model::DebtLandscape;

/// GPU-side copy of the debt landscape plus its display parameters.
///
/// One storage buffer is enough: the grid is replaced wholesale on every
/// parameter change, never evolved in place.
pub struct LandscapeBuffers {
    /// Flat f32 grid, row-major, discreteness rows x rate columns
    pub grid_buffer: Buffer,
    /// Uniform buffer for display parameters
    pub display_params_buffer: Buffer,
    pub width: u32,
    pub height: u32,
}

/// Display parameters for the heat-map shader (16 bytes, aligned to 16).
///
/// The color range is fixed at [0, DISPLAY_DEBT_MAX] and is narrower
/// than the data clamp; cells above it saturate at the hot end.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DisplayParams {
    pub grid_width: u32,
    pub grid_height: u32,
    pub debt_min: f32,
    pub debt_max: f32,
}

impl LandscapeBuffers {
    /// Create the buffers and upload the initial landscape.
    pub fn new(device: &Device, queue: &Queue, landscape: &DebtLandscape) -> Self {
        let cell_count = (RATE_SAMPLES * DISCRETENESS_SAMPLES) as usize;
        assert_eq!(
            landscape.values.len(),
            cell_count,
            "Landscape size mismatch"
        );

        let grid_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("landscape-grid-buffer"),
            size: (cell_count * std::mem::size_of::<f32>()) as u64,
            usage: BufferUsages::STORAGE | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let display_params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("display-params-buffer"),
            size: std::mem::size_of::<DisplayParams>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let buffers = Self {
            grid_buffer,
            display_params_buffer,
            width: RATE_SAMPLES,
            height: DISCRETENESS_SAMPLES,
        };
        buffers.upload_landscape(queue, landscape);
        buffers.upload_display_params(queue);
        buffers
    }

    /// Push a freshly computed landscape to the GPU. The model computes
    /// in f64; the shader only needs f32.
    pub fn upload_landscape(&self, queue: &Queue, landscape: &DebtLandscape) {
        let values: Vec<f32> = landscape.values.iter().map(|&v| v as f32).collect();
        queue.write_buffer(&self.grid_buffer, 0, bytemuck::cast_slice(&values));
    }

    /// Write the fixed display range.
    pub fn upload_display_params(&self, queue: &Queue) {
        let params = DisplayParams {
            grid_width: self.width,
            grid_height: self.height,
            debt_min: 0.0,
            debt_max: DISPLAY_DEBT_MAX,
        };
        queue.write_buffer(&self.display_params_buffer, 0, bytemuck::bytes_of(&params));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_params_size() {
        // uniform block must stay 16-byte aligned for WGSL
        assert_eq!(std::mem::size_of::<DisplayParams>(), 16);
    }
}
