// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// GPU-accelerated pairwise distance matrix
// This module is only included when the `gpu_support` feature flag is enabled

use bytemuck::{Pod, Zeroable};
use futures_intrusive::channel::shared::oneshot_channel;
use log::debug;
use ndarray::{Array2, ArrayView2};
use pollster::block_on;
use wgpu::util::DeviceExt;

use super::distance::clamp_non_negative;

/// Below this many rows the GPU setup overhead outweighs the speedup.
pub const GPU_MIN_POINTS: usize = 500;

const WORKGROUP_SIDE: u32 = 16;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct GpuConfig {
    point_count: u32,
    dim_count: u32,
    _padding: [u32; 2], // Padding to ensure 16-byte alignment
}

/// Byte sizes of the storage buffers for an `n × dims` input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BufferSizes {
    points_size: u64,
    out_size: u64,
}

/// Check that both storage buffers fit the device and that the shape fits
/// the shader's `u32` counters.
///
/// wgpu reports oversized bindings through its uncaptured-error handler,
/// which panics, so the sizes are validated before any buffer is created.
fn fits_device_limits(n: usize, dims: usize, limits: &wgpu::Limits) -> Result<BufferSizes, String> {
    if u32::try_from(n).is_err() || u32::try_from(dims).is_err() {
        return Err(format!("input shape {n}x{dims} exceeds u32 indexing"));
    }
    let f32_bytes = std::mem::size_of::<f32>() as u64;
    let (n64, dims64) = (n as u64, dims as u64);
    let points_size = n64
        .checked_mul(dims64)
        .and_then(|len| len.checked_mul(f32_bytes))
        .ok_or_else(|| format!("points buffer for {n}x{dims} overflows"))?;
    let out_size = n64
        .checked_mul(n64)
        .and_then(|len| len.checked_mul(f32_bytes))
        .ok_or_else(|| format!("distance matrix of {n}x{n} overflows"))?;

    let max_binding = u64::from(limits.max_storage_buffer_binding_size).min(limits.max_buffer_size);
    if points_size > max_binding {
        return Err(format!(
            "points buffer of {n}x{dims} ({points_size} bytes) exceeds the device storage limit of {max_binding} bytes"
        ));
    }
    if out_size > max_binding {
        return Err(format!(
            "distance matrix of {n}x{n} ({out_size} bytes) exceeds the device storage limit of {max_binding} bytes"
        ));
    }
    Ok(BufferSizes { points_size, out_size })
}

/// Computes the squared distance matrix on the GPU via wgpu
///
/// Each invocation of the compute shader handles one (i, j) pair and sums
/// squared coordinate differences directly, so entries are non-negative by
/// construction. Values are computed in `f32` and widened to `f64`; expect
/// relative deviations around 1e-6 from the CPU path.
///
/// # Errors
///
/// Returns an error if no adapter is available, if the points or the N×N
/// output do not fit into a single storage binding, or if any step of the
/// GPU round-trip fails. Callers are expected to fall back to the CPU implementation.
pub fn pairwise_squared_distances_gpu(
    x: ArrayView2<'_, f64>,
) -> Result<Array2<f64>, Box<dyn std::error::Error>> {
    let (n, dims) = x.dim();

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

    let adapter = match block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::HighPerformance,
        compatible_surface: None,
        force_fallback_adapter: false,
    })) {
        Ok(adapter) => adapter,
        Err(_) => return Err("Failed to find an appropriate adapter".into()),
    };

    let (device, queue) = block_on(adapter.request_device(&wgpu::DeviceDescriptor {
        label: Some("Pairwise Distance Device"),
        required_features: wgpu::Features::empty(),
        required_limits: wgpu::Limits::default(),
        memory_hints: wgpu::MemoryHints::default(),
        trace: wgpu::Trace::default(),
    }))?;

    let BufferSizes { points_size, out_size } = fits_device_limits(n, dims, &device.limits())?;
    debug!("GPU buffers: points={points_size} bytes, distances={out_size} bytes");

    // Row-major flattening, one f32 per coordinate
    let flat: Vec<f32> = x.iter().map(|&v| v as f32).collect();
    let config = GpuConfig {
        point_count: n as u32,
        dim_count: dims as u32,
        _padding: [0; 2],
    };

    let points_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Points Buffer"),
        contents: bytemuck::cast_slice(&flat),
        usage: wgpu::BufferUsages::STORAGE,
    });

    let config_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Config Buffer"),
        contents: bytemuck::bytes_of(&config),
        usage: wgpu::BufferUsages::UNIFORM,
    });

    let output_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Distances Buffer"),
        size: out_size,
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
        mapped_at_creation: false,
    });

    let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Staging Buffer"),
        size: out_size,
        usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Pairwise Distance Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("pairwise_distance.wgsl").into()),
    });

    let storage_entry = |binding: u32, read_only: bool| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::COMPUTE,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Storage { read_only },
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    };

    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Pairwise Distance Bind Group Layout"),
        entries: &[
            storage_entry(0, true),
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::COMPUTE,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            storage_entry(2, false),
        ],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Pairwise Distance Pipeline Layout"),
        bind_group_layouts: &[&bind_group_layout],
        push_constant_ranges: &[],
    });

    let compute_pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
        label: Some("Pairwise Distance Pipeline"),
        layout: Some(&pipeline_layout),
        module: &shader,
        entry_point: Some("main"),
        compilation_options: wgpu::PipelineCompilationOptions::default(),
        cache: None,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Pairwise Distance Bind Group"),
        layout: &bind_group_layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: points_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: config_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: output_buffer.as_entire_binding(),
            },
        ],
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Pairwise Distance Command Encoder"),
    });

    {
        let mut compute_pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("Pairwise Distance Compute Pass"),
            timestamp_writes: None,
        });
        compute_pass.set_pipeline(&compute_pipeline);
        compute_pass.set_bind_group(0, &bind_group, &[]);

        // 16x16 threads per workgroup, one thread per (i, j)
        let groups = (n as u32).div_ceil(WORKGROUP_SIDE);
        compute_pass.dispatch_workgroups(groups, groups, 1);
    }

    encoder.copy_buffer_to_buffer(&output_buffer, 0, &staging_buffer, 0, out_size);
    queue.submit(std::iter::once(encoder.finish()));

    let buffer_slice = staging_buffer.slice(..);
    let (sender, receiver) = oneshot_channel();
    buffer_slice.map_async(wgpu::MapMode::Read, move |v| {
        let _ = sender.send(v);
    });

    device
        .poll(wgpu::PollType::Wait)
        .map_err(|e| format!("Failed to poll device: {e:?}"))?;

    if let Some(Ok(())) = block_on(receiver.receive()) {
        let data = buffer_slice.get_mapped_range();
        let result: Vec<f64> = bytemuck::cast_slice::<u8, f32>(&data)
            .iter()
            .map(|&v| v as f64)
            .collect();
        drop(data);
        staging_buffer.unmap();

        let mut dists = Array2::from_shape_vec((n, n), result)?;
        clamp_non_negative(&mut dists);
        debug!("GPU pairwise distances computed for n={n}, m={dims}");
        Ok(dists)
    } else {
        Err("Failed to read back results from GPU".into())
    }
}
